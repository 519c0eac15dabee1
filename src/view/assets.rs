// ============================================================================
// Asset bundles — client-side script inclusion declarations
// ============================================================================

/// A client-side asset bundle: a named set of script files plus the bundles
/// it depends on. The host page resolves dependency names to its own
/// registered bundles; this crate only declares them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBundle {
    /// Unique bundle name; registration dedups on it.
    pub name: String,

    /// Script base names, without extension.
    pub js: Vec<String>,

    /// Names of bundles that must load before this one.
    pub depends: Vec<String>,
}

impl AssetBundle {
    /// The bundle for the companion dynamic-form client library.
    pub fn dynamic_form() -> Self {
        AssetBundle {
            name: "dynamicFormAsset".to_string(),
            js: vec!["yii2-dynamic-form".to_string()],
            depends: vec!["jqueryAsset".to_string(), "activeFormAsset".to_string()],
        }
    }

    /// Script file names for this bundle: `.js` sources in debug, `.min.js`
    /// otherwise.
    pub fn script_files(&self, debug: bool) -> Vec<String> {
        self.js
            .iter()
            .map(|base| {
                if debug {
                    format!("{base}.js")
                } else {
                    format!("{base}.min.js")
                }
            })
            .collect()
    }
}
