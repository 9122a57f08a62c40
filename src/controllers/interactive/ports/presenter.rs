use crate::controllers::interactive::events::render::RenderEvent;

pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);

    /// Blocks until everything presented so far has reached the screen, or
    /// until the presenter gives up waiting. Presenters without a screen
    /// return immediately.
    fn sync(&self) {}
}
