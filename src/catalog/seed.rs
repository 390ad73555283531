//! Catalog contents used the first time a data directory is opened.

use crate::config::DEFAULT_SCRIPT_URL;
use crate::types::Script;

pub const DEFAULT_CATEGORIES: [&str; 3] = ["Automation", "UI/UX", "Developer"];

pub fn default_scripts() -> Vec<Script> {
    vec![
        Script {
            id: 1,
            title: "Auto-Refresh Dashboard".to_string(),
            description: "Automatically refreshes any analytics dashboard every 5 minutes to keep data current.".to_string(),
            category: "Automation".to_string(),
            is_external_tool: true,
            content: "// ==UserScript==\n// @name Auto-Refresh\n// @match *://*/*\n// ==/UserScript==\nsetInterval(() => location.reload(), 300000);".to_string(),
            url: DEFAULT_SCRIPT_URL.to_string(),
            tags: vec!["refresh".to_string(), "analytics".to_string()],
            preview_image_url: None,
            copy_count: 0,
        },
        Script {
            id: 2,
            title: "Dark Mode Enforcer".to_string(),
            description: "Forces dark mode on websites that don't natively support it using CSS injection.".to_string(),
            category: "UI/UX".to_string(),
            is_external_tool: true,
            content: "// ==UserScript==\n// @name Dark Mode Enforcer\n// @match *://*/*\n// ==/UserScript==\nconst style = document.createElement('style');\nstyle.innerHTML = 'html { filter: invert(1) hue-rotate(180deg); } img { filter: invert(1) hue-rotate(180deg); }';\ndocument.head.appendChild(style);".to_string(),
            url: DEFAULT_SCRIPT_URL.to_string(),
            tags: vec!["css".to_string(), "theme".to_string()],
            preview_image_url: None,
            copy_count: 0,
        },
        Script {
            id: 3,
            title: "JSON Formatter".to_string(),
            description: "Prettifies raw JSON responses in the browser for better readability.".to_string(),
            category: "Developer".to_string(),
            is_external_tool: false,
            content: "function formatJSON(json) { return JSON.stringify(JSON.parse(json), null, 2); }".to_string(),
            url: DEFAULT_SCRIPT_URL.to_string(),
            tags: vec!["json".to_string(), "formatting".to_string()],
            preview_image_url: None,
            copy_count: 0,
        },
    ]
}

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| (*c).to_string()).collect()
}
