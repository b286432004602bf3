// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten tanto el valor como la lista de subscribers, así una
/// vista puede disparar un cambio y la app (suscrita sobre otro clon) lo ve.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Leer el valor actual aplicando una función (evita exponer el RefCell)
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    fn notify(&self) {
        // Clonar primero: un subscriber puede leer el estado (y volver a pedir
        // el borrow) mientras iteramos
        let subscribers: Vec<Callback> = self.subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_subscribers() {
        let state = ReactiveState::new(0);
        let fired = Rc::new(Cell::new(0));

        let fired_clone = fired.clone();
        state.subscribe(move || fired_clone.set(fired_clone.get() + 1));

        state.set(1);
        state.update(|v| *v += 1);

        assert_eq!(fired.get(), 2);
        assert_eq!(state.with(|v| *v), 2);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new("a".to_string());
        let clone = state.clone();

        let fired = Rc::new(Cell::new(0));
        let fired_clone = fired.clone();
        state.subscribe(move || fired_clone.set(fired_clone.get() + 1));

        // Un set sobre el clon notifica al subscriber registrado en el original
        clone.set("b".to_string());

        assert_eq!(fired.get(), 1);
        assert_eq!(state.with(|v| v.clone()), "b");
    }
}
