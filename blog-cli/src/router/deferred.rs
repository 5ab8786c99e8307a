use std::sync::OnceLock;

/// Значение, которое строится загрузчиком при первом обращении и дальше
/// живёт вместе с владельцем.
pub(crate) struct Deferred<T> {
    loader: fn() -> T,
    cell: OnceLock<T>,
}

impl<T> Deferred<T> {
    pub(crate) const fn new(loader: fn() -> T) -> Self {
        Self {
            loader,
            cell: OnceLock::new(),
        }
    }

    pub(crate) fn get(&self) -> &T {
        self.cell.get_or_init(self.loader)
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred")
            .field("value", &self.cell.get())
            .finish()
    }
}
