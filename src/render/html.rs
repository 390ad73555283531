use html_escape::{encode_double_quoted_attribute as escape_attr, encode_text as escape_text};

use super::{Action, Binding, Fragment, Region};
use crate::catalog::Catalog;
use crate::types::{CategoryFilter, Notice, NoticeKind, Script, ScriptId, Session, Theme};

pub const EMPTY_GRID_MESSAGE: &str = "No scripts found matching your criteria.";

struct FragmentBuilder {
    region: Region,
    html: String,
    bindings: Vec<Binding>,
}

impl FragmentBuilder {
    fn new(region: Region) -> Self {
        Self {
            region,
            html: String::new(),
            bindings: Vec::new(),
        }
    }

    fn push(&mut self, html: &str) {
        self.html.push_str(html);
    }

    /// Registers `action` for `element_id` and returns the element's
    /// identifying attributes.
    fn bind(&mut self, element_id: String, action: Action) -> String {
        let attrs = format!(
            r#"id="{}" data-action="{}""#,
            escape_attr(&element_id),
            action.name()
        );
        self.bindings.push(Binding { element_id, action });
        attrs
    }

    fn finish(self) -> Fragment {
        Fragment {
            region: self.region,
            html: self.html,
            bindings: self.bindings,
        }
    }
}

pub fn render_grid(scripts: &[&Script], favorites: &[ScriptId]) -> Fragment {
    let mut out = FragmentBuilder::new(Region::Grid);

    if scripts.is_empty() {
        out.push(&format!(
            r#"<div class="empty-state"><i data-lucide="search-x"></i><p>{EMPTY_GRID_MESSAGE}</p></div>"#
        ));
        return out.finish();
    }

    for script in scripts {
        let id = script.id;
        let is_favorite = favorites.contains(&id);
        let icon = if script.is_external_tool { "zap" } else { "code" };

        out.push(&format!(
            r#"<div class="script-card" data-script-id="{id}"><div class="card-header"><i data-lucide="{icon}"></i><span class="category">{}</span>"#,
            escape_text(&script.category)
        ));

        let favorite = out.bind(format!("favorite-{id}"), Action::ToggleFavorite(id));
        let favorite_class = if is_favorite {
            "favorite is-favorite"
        } else {
            "favorite"
        };
        out.push(&format!(
            r#"<button {favorite} class="{favorite_class}" aria-pressed="{is_favorite}"><i data-lucide="star"></i></button></div>"#
        ));

        let show = out.bind(format!("show-{id}"), Action::ShowScript(id));
        out.push(&format!(
            "<h3 {show}>{}</h3><p>{}</p>",
            escape_text(&script.title),
            escape_text(&script.description)
        ));

        if let Some(preview) = &script.preview_image_url {
            out.push(&format!(
                r#"<img class="preview" src="{}" alt="{}">"#,
                escape_attr(preview),
                escape_attr(&script.title)
            ));
        }

        if !script.tags.is_empty() {
            out.push(r#"<ul class="tags">"#);
            for tag in &script.tags {
                out.push(&format!("<li>{}</li>", escape_text(tag)));
            }
            out.push("</ul>");
        }

        let copy = out.bind(format!("copy-{id}"), Action::CopyScript(id));
        out.push(&format!(
            r#"<div class="card-actions"><button {copy}><i data-lucide="copy"></i> Copy Code</button><span class="copy-count">{}</span><a href="{}" target="_blank" rel="noopener"><i data-lucide="external-link"></i></a></div></div>"#,
            copy_label(script.copy_count),
            escape_attr(&script.url)
        ));
    }

    out.finish()
}

fn copy_label(count: u64) -> String {
    if count == 1 {
        "1 copy".to_string()
    } else {
        format!("{count} copies")
    }
}

pub fn render_filters(categories: &[String], active: &CategoryFilter, query: &str) -> Fragment {
    let mut out = FragmentBuilder::new(Region::Filters);

    out.push(&format!(
        r#"<input id="searchInput" type="search" placeholder="Search scripts" value="{}">"#,
        escape_attr(query)
    ));

    let mut options = vec![
        ("filter-all".to_string(), CategoryFilter::All),
        ("filter-favorites".to_string(), CategoryFilter::Favorites),
    ];
    options.extend(
        categories
            .iter()
            .enumerate()
            .map(|(i, name)| (format!("filter-{i}"), CategoryFilter::Category(name.clone()))),
    );

    out.push(r#"<div class="filters">"#);
    for (element_id, filter) in options {
        let class = if filter == *active {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        let label = escape_text(filter.as_str()).into_owned();
        let attrs = out.bind(element_id, Action::SelectCategory(filter));
        out.push(&format!(r#"<button {attrs} class="{class}">{label}</button>"#));
    }
    out.push("</div>");

    let theme = out.bind("themeToggle".to_string(), Action::ToggleTheme);
    out.push(&format!(
        r#"<button {theme} class="theme-toggle"><i data-lucide="moon"></i></button>"#
    ));

    out.finish()
}

pub fn render_auth(session: Option<&Session>) -> Fragment {
    let mut out = FragmentBuilder::new(Region::Auth);

    let Some(session) = session else {
        let login = out.bind("showLogin".to_string(), Action::ShowLogin);
        out.push(&format!(r#"<button {login} class="sign-in">Sign In</button>"#));
        return out.finish();
    };

    out.push(r#"<div class="session">"#);
    if session.is_owner {
        let dashboard = out.bind("openDashboard".to_string(), Action::OpenDashboard);
        out.push(&format!(
            r#"<button {dashboard}><i data-lucide="layout-dashboard"></i> Dashboard</button>"#
        ));
    }
    out.push(&format!(
        r#"<span class="greeting">Hi, {}</span>"#,
        escape_text(&session.display_name)
    ));
    let logout = out.bind("logout".to_string(), Action::Logout);
    out.push(&format!(r#"<button {logout} class="logout">Logout</button></div>"#));

    out.finish()
}

pub fn render_dashboard(catalog: &Catalog) -> Fragment {
    let mut out = FragmentBuilder::new(Region::Dashboard);
    let stats = catalog.stats();

    out.push(&format!(
        r#"<div class="stats"><div><span id="statsTotalScripts">{}</span> scripts</div><div><span id="statsTotalCategories">{}</span> categories</div><div><span id="statsFavorites">{}</span> favorites</div><div><span id="statsDanglingFavorites">{}</span> dangling favorites</div></div>"#,
        stats.total_scripts, stats.total_categories, stats.favorites, stats.dangling_favorites
    ));

    let add = out.bind("addScript".to_string(), Action::ShowAddScript);
    out.push(&format!(
        r#"<button {add}><i data-lucide="plus"></i> Add Script</button>"#
    ));

    out.push(r#"<table id="ownerScriptTable"><thead><tr><th>Title</th><th>Category</th><th>Type</th><th>Copies</th><th></th></tr></thead><tbody>"#);
    for script in catalog.scripts() {
        let id = script.id;
        out.push(&format!(
            "<tr><td>{}</td><td>{}</td><td><span class=\"kind\">{}</span></td><td>{}</td>",
            escape_text(&script.title),
            escape_text(&script.category),
            script.kind_label(),
            script.copy_count
        ));
        let edit = out.bind(format!("edit-{id}"), Action::EditScript(id));
        let delete = out.bind(format!("delete-{id}"), Action::DeleteScript(id));
        out.push(&format!(
            r#"<td><button {edit}><i data-lucide="edit-2"></i></button><button {delete}><i data-lucide="trash-2"></i></button></td></tr>"#
        ));
    }
    out.push("</tbody></table>");

    out.push(r#"<ul id="ownerCategoryList">"#);
    for (i, name) in catalog.categories().iter().enumerate() {
        let label = escape_text(name).into_owned();
        let delete = out.bind(
            format!("delete-category-{i}"),
            Action::DeleteCategory(name.clone()),
        );
        out.push(&format!(
            r#"<li>{label}<button {delete}><i data-lucide="x"></i></button></li>"#
        ));
    }
    out.push("</ul>");

    out.finish()
}

pub fn render_detail(script: &Script, is_favorite: bool) -> Fragment {
    let mut out = FragmentBuilder::new(Region::Detail);
    let id = script.id;

    out.push(&format!(
        r#"<article class="script-detail" data-script-id="{id}"><h2>{}</h2><p>{}</p>"#,
        escape_text(&script.title),
        escape_text(&script.description)
    ));
    out.push(&format!(
        r#"<pre><code class="language-javascript">{}</code></pre>"#,
        escape_text(&script.content)
    ));

    let copy = out.bind(format!("detail-copy-{id}"), Action::CopyScript(id));
    let favorite = out.bind(format!("detail-favorite-{id}"), Action::ToggleFavorite(id));
    let favorite_label = if is_favorite { "Unfavorite" } else { "Favorite" };
    out.push(&format!(
        r#"<div class="detail-actions"><button {copy}>Copy Code</button><button {favorite}>{favorite_label}</button></div></article>"#
    ));

    out.finish()
}

pub fn render_notice(notice: &Notice) -> Fragment {
    let mut out = FragmentBuilder::new(Region::Notice);
    let (kind, icon) = match notice.kind {
        NoticeKind::Success => ("success", "check-circle"),
        NoticeKind::Info => ("info", "info"),
        NoticeKind::Error => ("error", "alert-circle"),
    };

    out.push(&format!(
        r#"<div class="toast toast-{kind}" role="status"><i data-lucide="{icon}"></i><p>{}</p></div>"#,
        escape_text(&notice.message)
    ));
    out.finish()
}

/// Assembles a standalone document from the latest fragment of each region.
pub fn render_page<'a>(theme: Theme, fragments: impl IntoIterator<Item = &'a Fragment>) -> String {
    let fragments: Vec<&Fragment> = fragments.into_iter().collect();
    let class = match theme {
        Theme::Dark => r#" class="dark""#,
        Theme::Light => "",
    };

    let mut page = format!(
        "<!DOCTYPE html>\n<html lang=\"en\"{class}>\n<head>\n<meta charset=\"utf-8\">\n<title>Script Shelf</title>\n</head>\n<body>\n"
    );

    for region in Region::ALL {
        let body = fragments
            .iter()
            .find(|f| f.region == region)
            .map(|f| f.html.as_str())
            .unwrap_or_default();
        page.push_str(&format!(
            "<section id=\"{}\">{body}</section>\n",
            region.container_id()
        ));
    }

    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::default_scripts;

    fn element_ids(fragment: &Fragment) -> Vec<&str> {
        fragment
            .bindings
            .iter()
            .map(|b| b.element_id.as_str())
            .collect()
    }

    #[test]
    fn test_grid_binds_every_card() {
        let scripts = default_scripts();
        let refs: Vec<&Script> = scripts.iter().collect();
        let fragment = render_grid(&refs, &[2]);

        assert_eq!(fragment.region, Region::Grid);
        assert_eq!(fragment.bindings.len(), 9);
        assert!(element_ids(&fragment).contains(&"copy-3"));
        assert!(fragment.html.contains(
            r#"id="favorite-2" data-action="toggle-favorite" class="favorite is-favorite""#
        ));
        assert!(
            fragment
                .html
                .contains(r#"id="favorite-1" data-action="toggle-favorite" class="favorite""#)
        );
    }

    #[test]
    fn test_empty_grid_renders_placeholder() {
        let fragment = render_grid(&[], &[]);
        assert!(fragment.html.contains(EMPTY_GRID_MESSAGE));
        assert!(fragment.bindings.is_empty());
    }

    #[test]
    fn test_grid_escapes_user_text() {
        let mut script = default_scripts().remove(0);
        script.title = "<script>alert(1)</script>".to_string();
        script.url = "https://x.test/?a=\"b\"".to_string();
        let fragment = render_grid(&[&script], &[]);

        assert!(!fragment.html.contains("<script>"));
        assert!(fragment.html.contains("&lt;script&gt;"));
        assert!(fragment.html.contains("&quot;b&quot;"));
    }

    #[test]
    fn test_filters_mark_active_selector() {
        let categories = vec!["Automation".to_string(), "Developer".to_string()];
        let active = CategoryFilter::Category("Developer".to_string());
        let fragment = render_filters(&categories, &active, "js \"x\"");

        assert!(fragment.html.contains(
            r#"id="filter-1" data-action="select-category" class="filter-btn active">Developer"#
        ));
        assert!(fragment.html.contains("value=\"js &quot;x&quot;\""));
        assert_eq!(
            element_ids(&fragment),
            vec!["filter-all", "filter-favorites", "filter-0", "filter-1", "themeToggle"]
        );
    }

    #[test]
    fn test_auth_variants() {
        let signed_out = render_auth(None);
        assert_eq!(element_ids(&signed_out), vec!["showLogin"]);

        let user = Session {
            identifier: "ada@example.com".to_string(),
            display_name: "ada".to_string(),
            is_owner: false,
        };
        let fragment = render_auth(Some(&user));
        assert_eq!(element_ids(&fragment), vec!["logout"]);
        assert!(fragment.html.contains("Hi, ada"));

        let owner = Session {
            is_owner: true,
            ..user
        };
        assert_eq!(
            element_ids(&render_auth(Some(&owner))),
            vec!["openDashboard", "logout"]
        );
    }

    #[test]
    fn test_dashboard_lists_scripts_and_categories() {
        let catalog = Catalog::seeded();
        let fragment = render_dashboard(&catalog);

        assert!(fragment.html.contains(r#"<span id="statsTotalScripts">3</span>"#));
        assert!(fragment.html.contains("Tampermonkey"));
        assert!(fragment.html.contains("Standard"));
        let ids = element_ids(&fragment);
        assert!(ids.contains(&"addScript"));
        assert!(ids.contains(&"delete-2"));
        assert!(ids.contains(&"delete-category-2"));
    }

    #[test]
    fn test_detail_escapes_content() {
        let scripts = default_scripts();
        let fragment = render_detail(&scripts[1], true);

        assert!(fragment.html.contains("document.createElement('style')"));
        assert!(fragment.html.contains("// ==UserScript=="));
        assert!(fragment.html.contains("Unfavorite"));
    }

    #[test]
    fn test_page_applies_theme_and_containers() {
        let notice = render_notice(&Notice::error("Could not copy"));
        let page = render_page(Theme::Dark, [&notice]);

        assert!(page.contains(r#"<html lang="en" class="dark">"#));
        assert!(page.contains(r#"<section id="scriptGrid"></section>"#));
        assert!(page.contains("toast-error"));
    }
}
