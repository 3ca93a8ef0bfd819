//! Case conversions and the mapping between file paths and Elixir module names.

use super::layout::ProjectLayout;

/// Filename suffixes folded into the last module word, in matching order.
const MODULE_SUFFIXES: [&str; 8] =
    ["_controller", "_view", "_channel", "_component", "_live", "_html", "_json", "_test"];

/// Module-name suffixes that place a module in a special directory, longest first.
const MODULE_WORD_SUFFIXES: [&str; 7] =
    ["Controller", "Component", "Channel", "View", "Live", "HTML", "JSON"];

const WEB_WORD: &str = "Web";

/// Convert `CamelCase` to `snake_case`.
///
/// A boundary is only inserted between a lowercase letter or digit and a
/// following uppercase letter, so acronym runs collapse: `APIRequest`
/// becomes `apirequest`.
pub fn to_snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut previous: Option<char> = None;
    for c in input.chars() {
        let boundary = previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
        if boundary && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c);
        previous = Some(c);
    }
    out.to_lowercase()
}

/// Convert `snake_case` to `camelCase`.
pub fn to_camel_case(input: &str) -> String {
    input
        .split('_')
        .enumerate()
        .map(|(index, part)| if index == 0 { part.to_lowercase() } else { capitalize(part) })
        .collect()
}

/// Convert `snake_case` to `PascalCase`.
pub fn to_pascal_case(input: &str) -> String {
    input.split('_').map(capitalize).collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Derive the Elixir module name for a file path.
///
/// `lib/my_app_web/controllers/user_controller.ex` maps to
/// `MyAppWeb.UserController`. Returns an empty string when the path has no
/// lib or test root followed by another segment. Root, web suffix and
/// special directory names come from `layout`.
pub fn path_to_module_name(path: &str, layout: &ProjectLayout) -> String {
    let normalized = path.strip_prefix("./").unwrap_or(path);
    let components: Vec<&str> = normalized.split('/').collect();

    let Some(root) = components.iter().position(|s| *s == layout.lib || *s == layout.test) else {
        return String::new();
    };
    let Some(app) = components.get(root + 1) else {
        return String::new();
    };

    let last = components.len() - 1;
    if root + 1 == last {
        return file_module_word(app);
    }

    let mut words = vec![app_module_word(app, &layout.web_suffix)];
    for segment in &components[root + 2..last] {
        if !layout.is_special_directory(segment) {
            words.push(to_pascal_case(segment));
        }
    }

    let filename = components[last];
    if filename.contains('.') {
        words.push(file_module_word(filename));
    }

    words.join(".")
}

fn app_module_word(segment: &str, web_suffix: &str) -> String {
    match segment.strip_suffix(web_suffix) {
        Some(base) => format!("{}{}", to_pascal_case(base), WEB_WORD),
        None => to_pascal_case(segment),
    }
}

fn file_module_word(filename: &str) -> String {
    let stem = filename.split('.').next().unwrap_or(filename);
    for suffix in MODULE_SUFFIXES {
        if let Some(base) = stem.strip_suffix(suffix) {
            return format!("{}{}", to_pascal_case(base), to_pascal_case(&suffix[1..]));
        }
    }
    to_pascal_case(stem)
}

/// Derive the file path for an Elixir module name.
///
/// `MyAppWeb.UserController` maps to
/// `<root_dir>/my_app_web/controllers/user_controller.<file_extension>`,
/// with the web suffix and directory names taken from `layout`.
pub fn module_name_to_path(
    module_name: &str,
    root_dir: &str,
    file_extension: &str,
    layout: &ProjectLayout,
) -> String {
    if module_name.is_empty() {
        return String::new();
    }

    let words: Vec<&str> = module_name.split('.').collect();
    let app_dir = match words[0].strip_suffix(WEB_WORD) {
        Some(base) => format!("{}{}", to_snake_case(base), layout.web_suffix),
        None => to_snake_case(words[0]),
    };

    if words.len() == 1 {
        return format!("{}/{}.{}", root_dir, app_dir, file_extension);
    }

    let mut segments = vec![root_dir.to_string(), app_dir];
    segments.extend(words[1..words.len() - 1].iter().map(|word| to_snake_case(word)));

    let last = words[words.len() - 1];
    let filename = match split_module_suffix(last, layout) {
        Some((base, suffix, directory)) => {
            if !segments.iter().any(|segment| segment == directory) {
                segments.insert(2, directory.to_string());
            }
            format!("{}_{}.{}", to_snake_case(base), suffix.to_lowercase(), file_extension)
        }
        None => format!("{}.{}", to_snake_case(last), file_extension),
    };
    segments.push(filename);

    segments.join("/")
}

fn split_module_suffix<'a, 'l>(
    word: &'a str,
    layout: &'l ProjectLayout,
) -> Option<(&'a str, &'static str, &'l str)> {
    MODULE_WORD_SUFFIXES.iter().find_map(|suffix| {
        word.strip_suffix(suffix)
            .filter(|base| !base.is_empty())
            .map(|base| (base, *suffix, suffix_directory(suffix, layout)))
    })
}

/// HTML and JSON modules live beside their controller.
fn suffix_directory<'l>(suffix: &str, layout: &'l ProjectLayout) -> &'l str {
    match suffix {
        "Component" => &layout.components,
        "Channel" => &layout.channels,
        "View" => &layout.views,
        "Live" => &layout.live,
        _ => &layout.controllers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn layout() -> ProjectLayout {
        ProjectLayout::default()
    }

    #[test]
    fn snake_case_inserts_boundaries() {
        assert_eq!(to_snake_case("UserController"), "user_controller");
        assert_eq!(to_snake_case("user"), "user");
        assert_eq!(to_snake_case("MyApp"), "my_app");
        assert_eq!(to_snake_case("Oauth2Client"), "oauth2_client");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn snake_case_collapses_acronyms() {
        assert_eq!(to_snake_case("APIRequest"), "apirequest");
        assert_eq!(to_snake_case("UserHTML"), "user_html");
    }

    #[test]
    fn camel_case_lowercases_first_part() {
        assert_eq!(to_camel_case("user_controller"), "userController");
        assert_eq!(to_camel_case("user"), "user");
        assert_eq!(to_camel_case("my_app_web"), "myAppWeb");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn pascal_case_capitalizes_every_part() {
        assert_eq!(to_pascal_case("user_controller"), "UserController");
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("my_app_web"), "MyAppWeb");
        assert_eq!(to_pascal_case("double__underscore"), "DoubleUnderscore");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn path_to_module_name_for_core_and_web_files() {
        assert_eq!(path_to_module_name("lib/my_app/user.ex", &layout()), "MyApp.User");
        assert_eq!(
            path_to_module_name("lib/my_app_web/controllers/user_controller.ex", &layout()),
            "MyAppWeb.UserController"
        );
        assert_eq!(path_to_module_name("test/my_app/user_test.exs", &layout()), "MyApp.UserTest");
        assert_eq!(path_to_module_name("lib/my_app_web/live/user_live.ex", &layout()), "MyAppWeb.UserLive");
        assert_eq!(path_to_module_name("lib/my_app/accounts/user.ex", &layout()), "MyApp.Accounts.User");
    }

    #[test]
    fn path_to_module_name_keeps_namespaces_and_skips_special_dirs() {
        assert_eq!(
            path_to_module_name("./lib/my_app_web/controllers/admin/user_controller.ex", &layout()),
            "MyAppWeb.Admin.UserController"
        );
        assert_eq!(
            path_to_module_name("test/my_app_web/controllers/page_controller_test.exs", &layout()),
            "MyAppWeb.PageControllerTest"
        );
    }

    #[test]
    fn path_to_module_name_for_file_directly_under_root() {
        assert_eq!(path_to_module_name("lib/my_app.ex", &layout()), "MyApp");
        assert_eq!(path_to_module_name("lib/my_app_web.ex", &layout()), "MyAppWeb");
    }

    #[test]
    fn path_to_module_name_without_root_is_empty() {
        assert_eq!(path_to_module_name("priv/repo/seeds.exs", &layout()), "");
        assert_eq!(path_to_module_name("lib", &layout()), "");
    }

    #[test]
    fn module_name_to_path_defaults() {
        assert_eq!(module_name_to_path("MyApp.User", "lib", "ex", &layout()), "lib/my_app/user.ex");
        assert_eq!(
            module_name_to_path("MyAppWeb.UserController", "lib", "ex", &layout()),
            "lib/my_app_web/controllers/user_controller.ex"
        );
        assert_eq!(module_name_to_path("MyApp.User", "test", "exs", &layout()), "test/my_app/user.exs");
        assert_eq!(
            module_name_to_path("MyAppWeb.UserLive", "lib", "ex", &layout()),
            "lib/my_app_web/live/user_live.ex"
        );
        assert_eq!(
            module_name_to_path("MyApp.Accounts.User", "lib", "ex", &layout()),
            "lib/my_app/accounts/user.ex"
        );
    }

    #[test]
    fn module_name_to_path_puts_html_and_json_next_to_controllers() {
        assert_eq!(
            module_name_to_path("MyAppWeb.UserHTML", "lib", "ex", &layout()),
            "lib/my_app_web/controllers/user_html.ex"
        );
        assert_eq!(
            module_name_to_path("MyAppWeb.UserJSON", "lib", "ex", &layout()),
            "lib/my_app_web/controllers/user_json.ex"
        );
    }

    #[test]
    fn module_name_to_path_inserts_directory_after_app() {
        assert_eq!(
            module_name_to_path("MyAppWeb.Admin.UserController", "lib", "ex", &layout()),
            "lib/my_app_web/controllers/admin/user_controller.ex"
        );
    }

    #[test]
    fn module_name_to_path_single_word() {
        assert_eq!(module_name_to_path("MyApp", "lib", "ex", &layout()), "lib/my_app.ex");
        assert_eq!(module_name_to_path("", "lib", "ex", &layout()), "");
    }

    #[test]
    fn configured_directory_names_drive_both_directions() {
        let layout = ProjectLayout {
            views: "screens".to_string(),
            web_suffix: "_www".to_string(),
            ..ProjectLayout::default()
        };
        assert_eq!(path_to_module_name("lib/my_app_www/screens/user_view.ex", &layout), "MyAppWeb.UserView");
        assert_eq!(
            module_name_to_path("MyAppWeb.UserView", "lib", "ex", &layout),
            "lib/my_app_www/screens/user_view.ex"
        );
        assert_eq!(
            path_to_module_name("lib/my_app_web/views/user_view.ex", &layout),
            "MyAppWeb.Views.UserView"
        );
    }

    fn word() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{1,7}".prop_filter("special directory names are skipped", |w| {
            let snake = to_snake_case(w);
            !layout().is_special_directory(&snake)
                && !MODULE_SUFFIXES.iter().any(|s| snake.ends_with(s))
        })
    }

    fn module_name() -> impl Strategy<Value = String> {
        let suffix = prop::sample::select(vec!["", "Controller", "View", "Channel", "Component", "Live"]);
        (word(), any::<bool>(), prop::collection::vec(word(), 0..3), word(), suffix).prop_map(
            |(app, web, namespace, leaf, suffix)| {
                let mut words = vec![if web { format!("{app}Web") } else { app }];
                words.extend(namespace);
                words.push(format!("{leaf}{suffix}"));
                words.join(".")
            },
        )
    }

    proptest! {
        #[test]
        fn module_name_roundtrips_through_path(name in module_name()) {
            let path = module_name_to_path(&name, "lib", "ex", &layout());
            prop_assert_eq!(path_to_module_name(&path, &layout()), name);
        }
    }
}
