use crate::controllers::cli::render_controller::CliRenderController;
use crate::controllers::viewport::readout::ViewportReadout;
use crate::core::actions::render_frame::RenderError;
use crate::input::cli::args::{ArgsError, RenderArgs};
use crate::presenters::file::ppm::PpmFilePresenter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderCommandError {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("cannot write image: {0}")]
    Io(#[from] std::io::Error),
}

pub struct RenderCommand {
    args: RenderArgs,
}

impl RenderCommand {
    pub fn new(args: RenderArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<ViewportReadout, RenderCommandError> {
        let plan = self.args.plan()?;
        let presenter = PpmFilePresenter::with_gridlines(self.args.gridlines);
        let mut controller = CliRenderController::new(presenter);

        let readout = controller.generate(&plan)?;
        controller.write(&self.args.output)?;

        Ok(readout)
    }
}
