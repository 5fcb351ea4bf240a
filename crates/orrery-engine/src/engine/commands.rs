use super::SceneEngine;

/// Requests for the host runtime. The engine only queues them; the runtime
/// drains the queue after every tick and applies them to the window.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RuntimeCommand {
    EnterFullscreen,
    ExitFullscreen,
    Exit,
}

impl SceneEngine {
    pub fn push_command(&mut self, command: RuntimeCommand) {
        log::trace!("queued runtime command {command:?}");
        self.commands.push(command);
    }

    pub fn enter_fullscreen(&mut self) {
        self.push_command(RuntimeCommand::EnterFullscreen);
    }

    pub fn exit_fullscreen(&mut self) {
        self.push_command(RuntimeCommand::ExitFullscreen);
    }

    pub fn request_exit(&mut self) {
        self.push_command(RuntimeCommand::Exit);
    }

    /// Takes every queued command, oldest first.
    pub fn drain_commands(&mut self) -> Vec<RuntimeCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn pending_commands(&self) -> &[RuntimeCommand] {
        &self.commands
    }
}
