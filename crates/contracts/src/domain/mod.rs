pub mod a001_user;
pub mod a002_referrer;
pub mod a003_sales_record;
