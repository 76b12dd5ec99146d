use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct HookModel {
    pub id: String,
    pub display_name: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct HookWorkspace {
    pub current_dir: Option<String>,
    pub project_dir: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct OutputStyle {
    pub name: String,
}

/// Session snapshot delivered on stdin by the statusLine hook.
///
/// Every field is optional so a partial or older payload still renders;
/// a payload that fails to parse at all falls back to `HookJson::default()`.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct HookJson {
    pub session_id: Option<String>,
    pub transcript_path: Option<String>,
    pub cwd: Option<String>,
    pub model: Option<HookModel>,
    pub workspace: Option<HookWorkspace>,
    pub output_style: Option<OutputStyle>,
}

impl HookJson {
    /// Best directory to inspect: workspace project dir, then workspace
    /// current dir, then the hook-level cwd.
    pub fn working_dir(&self) -> Option<&str> {
        self.workspace
            .as_ref()
            .and_then(|w| w.project_dir.as_deref().or(w.current_dir.as_deref()))
            .or(self.cwd.as_deref())
    }

    pub fn model_display_name(&self) -> &str {
        self.model
            .as_ref()
            .map(|m| m.display_name.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("Claude")
    }

    pub fn style_name(&self) -> &str {
        self.output_style
            .as_ref()
            .map(|s| s.name.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("default")
    }
}
