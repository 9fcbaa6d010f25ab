use crate::coords::Viewport;

use super::{Context, Graphics};

/// Calls `draw_end` when dropped, whatever exit path unwinds past it.
struct EndGuard<'a, G: Graphics + ?Sized> {
    backend: &'a mut G,
}

impl<G: Graphics + ?Sized> Drop for EndGuard<'_, G> {
    fn drop(&mut self) {
        self.backend.draw_end();
    }
}

/// Runs one draw session: begin, invoke `f`, end.
///
/// The callback receives the frame's identity [`Context`] and the backend
/// to issue draw calls against. `draw_end` runs exactly once per call, on
/// every exit path out of `f`, panics included; the backend is never left
/// with an open frame.
pub fn draw<G, F>(backend: &mut G, viewport: Viewport, f: F)
where
    G: Graphics + ?Sized,
    F: FnOnce(Context, &mut G),
{
    let context = backend.draw_begin(viewport);
    let mut guard = EndGuard { backend };
    f(context, &mut *guard.backend);
}

/// [`draw`] for fallible draw code.
///
/// An `Err` from the callback still closes the frame; the error surfaces
/// to the caller only after `draw_end` has run.
pub fn try_draw<G, T, E, F>(backend: &mut G, viewport: Viewport, f: F) -> Result<T, E>
where
    G: Graphics + ?Sized,
    F: FnOnce(Context, &mut G) -> Result<T, E>,
{
    let context = backend.draw_begin(viewport);
    let mut guard = EndGuard { backend };
    f(context, &mut *guard.backend)
}
