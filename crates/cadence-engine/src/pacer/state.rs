/// Run/step toggles for the content-refresh and render steps.
///
/// Each step runs in a tick iff its `run_*` flag or its `single_*` companion is
/// set. The `single_*` flag is consumed by the tick whether or not the `run_*`
/// flag was also set.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PacingState {
    pub run_loop: bool,
    pub single_loop: bool,
    pub run_update: bool,
    pub single_loop_update: bool,
}

/// Observable mode of one run/step toggle pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StepMode {
    Continuous,
    Paused,
    ArmedForOneStep,
}

/// Operator commands, normally produced by `input::KeyBindings`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PacerCommand {
    /// Flip continuous rendering.
    ToggleRender,
    /// Pause rendering and render exactly one frame.
    StepRender,
    /// Pause content refresh and refresh exactly once.
    StepUpdate,
    /// Flip continuous content refresh.
    ToggleUpdate,
    /// Show/hide buffer diagnostics on publish.
    ToggleDiagnostics,
    Exit,
}

impl PacingState {
    /// Everything paused, nothing armed.
    pub const PAUSED: Self = Self {
        run_loop: false,
        single_loop: false,
        run_update: false,
        single_loop_update: false,
    };

    pub fn render_mode(&self) -> StepMode {
        mode_of(self.run_loop, self.single_loop)
    }

    pub fn update_mode(&self) -> StepMode {
        mode_of(self.run_update, self.single_loop_update)
    }

    /// Decides the content-refresh step for this tick and consumes the one-shot.
    pub fn take_update_step(&mut self) -> bool {
        let run = self.run_update || self.single_loop_update;
        self.single_loop_update = false;
        run
    }

    /// Decides the render step for this tick and consumes the one-shot.
    pub fn take_render_step(&mut self) -> bool {
        let run = self.run_loop || self.single_loop;
        self.single_loop = false;
        run
    }

    /// Applies a toggle command. Returns `false` for commands that do not
    /// touch the toggles (`Exit`, `ToggleDiagnostics`).
    pub fn apply(&mut self, command: PacerCommand) -> bool {
        match command {
            PacerCommand::ToggleRender => self.run_loop = !self.run_loop,
            PacerCommand::StepRender => {
                self.run_loop = false;
                self.single_loop = true;
            }
            PacerCommand::StepUpdate => {
                self.run_update = false;
                self.single_loop_update = true;
            }
            PacerCommand::ToggleUpdate => self.run_update = !self.run_update,
            PacerCommand::ToggleDiagnostics | PacerCommand::Exit => return false,
        }
        true
    }
}

impl Default for PacingState {
    /// Everything running, with both one-shots armed for the first tick.
    fn default() -> Self {
        Self {
            run_loop: true,
            single_loop: true,
            run_update: true,
            single_loop_update: true,
        }
    }
}

fn mode_of(run: bool, single: bool) -> StepMode {
    if run {
        StepMode::Continuous
    } else if single {
        StepMode::ArmedForOneStep
    } else {
        StepMode::Paused
    }
}
