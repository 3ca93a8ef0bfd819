use crate::domain::EditorSettings;

/// Pick the editor: flag, then config, then `$EDITOR`, then `$VISUAL`, then `zed -g`.
pub fn resolve_editor<V>(
    flag: Option<&str>,
    configured: Option<&EditorSettings>,
    env: V,
) -> EditorSettings
where
    V: Fn(&str) -> Option<String>,
{
    if let Some(editor) = flag.and_then(EditorSettings::from_command_line) {
        return editor;
    }
    if let Some(editor) = configured {
        return editor.clone();
    }
    ["EDITOR", "VISUAL"]
        .into_iter()
        .find_map(|key| env(key).as_deref().and_then(EditorSettings::from_command_line))
        .unwrap_or_default()
}
