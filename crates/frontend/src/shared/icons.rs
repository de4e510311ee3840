//! Inline SVG icons (lucide outlines)

use leptos::prelude::*;

fn outline(size: u32, paths: AnyView) -> AnyView {
    let size = size.to_string();
    view! {
        <svg width=size.clone() height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths}
        </svg>
    }
    .into_any()
}

pub fn icon(name: &str) -> AnyView {
    icon_sized(name, 20)
}

pub fn icon_sized(name: &str, size: u32) -> AnyView {
    let paths = match name {
        "home" => view! {
            <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
            <polyline points="9 22 9 12 15 12 15 22"/>
        }.into_any(),
        "clock" => view! {
            <circle cx="12" cy="12" r="10"/>
            <polyline points="12 6 12 12 16 14"/>
        }.into_any(),
        "layout-dashboard" => view! {
            <rect x="3" y="3" width="7" height="9" rx="1"/>
            <rect x="14" y="3" width="7" height="5" rx="1"/>
            <rect x="14" y="12" width="7" height="9" rx="1"/>
            <rect x="3" y="16" width="7" height="5" rx="1"/>
        }.into_any(),
        "file-text" => view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
            <path d="M14 2v6h6"/>
            <path d="M16 13H8"/>
            <path d="M16 17H8"/>
            <path d="M10 9H8"/>
        }.into_any(),
        "target" => view! {
            <circle cx="12" cy="12" r="10"/>
            <circle cx="12" cy="12" r="6"/>
            <circle cx="12" cy="12" r="2"/>
        }.into_any(),
        "settings" => view! {
            <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/>
            <circle cx="12" cy="12" r="3"/>
        }.into_any(),
        "folder-closed" => view! {
            <path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"/>
            <path d="M2 10h20"/>
        }.into_any(),
        "search" => view! {
            <circle cx="11" cy="11" r="8"/>
            <path d="m21 21-4.3-4.3"/>
        }.into_any(),
        "menu" => view! {
            <line x1="4" x2="20" y1="12" y2="12"/>
            <line x1="4" x2="20" y1="6" y2="6"/>
            <line x1="4" x2="20" y1="18" y2="18"/>
        }.into_any(),
        "plus" => view! {
            <path d="M5 12h14"/>
            <path d="M12 5v14"/>
        }.into_any(),
        "share" => view! {
            <circle cx="18" cy="5" r="3"/>
            <circle cx="6" cy="12" r="3"/>
            <circle cx="18" cy="19" r="3"/>
            <line x1="8.59" x2="15.42" y1="13.51" y2="17.49"/>
            <line x1="15.41" x2="8.59" y1="6.51" y2="10.49"/>
        }.into_any(),
        "download" => view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <polyline points="7 10 12 15 17 10"/>
            <line x1="12" x2="12" y1="15" y2="3"/>
        }.into_any(),
        "upload-cloud" => view! {
            <path d="M4 14.9A7 7 0 1 1 15.7 8h1.8a4.5 4.5 0 0 1 2.5 8.2"/>
            <path d="M12 12v9"/>
            <path d="m16 16-4-4-4 4"/>
        }.into_any(),
        "arrow-right" => view! {
            <path d="M5 12h14"/>
            <path d="m12 5 7 7-7 7"/>
        }.into_any(),
        "star" => view! {
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>
        }.into_any(),
        "filter" => view! {
            <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/>
        }.into_any(),
        "trending-up" => view! {
            <polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/>
            <polyline points="16 7 22 7 22 13"/>
        }.into_any(),
        "shopping-bag" => view! {
            <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"/>
            <path d="M3 6h18"/>
            <path d="M16 10a4 4 0 0 1-8 0"/>
        }.into_any(),
        "more-horizontal" => view! {
            <circle cx="12" cy="12" r="1"/>
            <circle cx="19" cy="12" r="1"/>
            <circle cx="5" cy="12" r="1"/>
        }.into_any(),
        "chevron-right" => view! {
            <polyline points="9 18 15 12 9 6"/>
        }.into_any(),
        "chevron-down" => view! {
            <polyline points="6 9 12 15 18 9"/>
        }.into_any(),
        _ => view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 8v4l3 3"/>
        }.into_any(),
    };

    outline(size, paths)
}
