use super::*;

/// DOM event subscription that is removed again when the guard drops.
///
/// Never drop a guard from inside its own callback; route that work through
/// [`defer`] instead.
pub(super) struct EventListenerGuard {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListenerGuard {
    pub(super) fn new(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, String> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| format!("failed to subscribe to {event} events"))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Subscribes `handler` and parks the guard in `slot` until the slot is cleared.
pub(super) fn listen_into(
    slot: &'static std::thread::LocalKey<RefCell<Vec<EventListenerGuard>>>,
    target: &web_sys::EventTarget,
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), String> {
    let guard = EventListenerGuard::new(target, event, handler)?;
    slot.with(|guards| guards.borrow_mut().push(guard));
    Ok(())
}

pub(super) fn release_listeners(slot: &'static std::thread::LocalKey<RefCell<Vec<EventListenerGuard>>>) {
    let released = slot.with(|guards| std::mem::take(&mut *guards.borrow_mut()));
    drop(released);
}
