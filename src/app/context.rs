use crate::domain::{Configuration, PathResolver, TemplateSynthesizer};
use crate::ports::{EditorLauncher, ProjectFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, E: EditorLauncher> {
    filesystem: F,
    editor: E,
    resolver: PathResolver,
    synthesizer: TemplateSynthesizer,
}

impl<F: ProjectFilesystem, E: EditorLauncher> AppContext<F, E> {
    /// Create a context whose resolver and synthesizer follow `config`.
    pub fn new(filesystem: F, editor: E, config: &Configuration) -> Self {
        let layout = config.layout();
        Self {
            filesystem,
            editor,
            resolver: PathResolver::new(layout.clone()),
            synthesizer: TemplateSynthesizer::new(layout, config.stub_options()),
        }
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn synthesizer(&self) -> &TemplateSynthesizer {
        &self.synthesizer
    }
}
