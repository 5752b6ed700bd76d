//! Entity store holding teams and members in insertion order.

mod entity_store;

pub use entity_store::EntityStore;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
