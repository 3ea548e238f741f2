use super::{RadialGlow, RenderCommand, Star, Surface, Viewport};

/// A surface that records commands instead of drawing them.
///
/// Used by headless drivers and tests; a real backend can replay the
/// recorded frame with [`CommandRecorder::replay`].
#[derive(Debug, Default)]
pub struct CommandRecorder {
    /// All commands since the last `begin_frame`.
    commands: Vec<RenderCommand>,
    /// Number of frames started.
    frames: u64,
    /// Size reported through [`Surface::extent`].
    extent: Option<Viewport>,
}

impl CommandRecorder {
    /// Creates a new empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
            frames: 0,
            extent: None,
        }
    }

    /// Creates a recorder that reports a fixed drawable size, like a canvas
    /// that already has a backing store.
    #[must_use]
    pub fn with_extent(extent: Viewport) -> Self {
        Self {
            extent: Some(extent),
            ..Self::new()
        }
    }

    /// Begins a new frame, dropping the previous one.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames += 1;
    }

    /// Commands recorded this frame.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Number of frames started with `begin_frame`.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Takes the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Draws the recorded frame onto another surface.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for command in &self.commands {
            command.apply(target);
        }
    }
}

impl Surface for CommandRecorder {
    fn clear(&mut self, viewport: Viewport) {
        self.commands.push(RenderCommand::Clear { viewport });
    }

    fn extent(&self) -> Option<Viewport> {
        self.extent
    }

    fn fill_glow(&mut self, glow: &RadialGlow) {
        self.commands.push(RenderCommand::Glow(*glow));
    }

    fn fill_star(&mut self, star: &Star) {
        self.commands.push(RenderCommand::Star(*star));
    }
}
