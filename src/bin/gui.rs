use julia_animator::{GuiError, PixelsPresenterFactory, RunGuiCommand, WindowSettings};

fn main() -> Result<(), GuiError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = RunGuiCommand::new(PixelsPresenterFactory, WindowSettings::default());

    command.execute()
}
