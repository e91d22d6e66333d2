//! End-to-end coverage for the `FilterFields` derive: fixture records go
//! through the real macro and the real builder, the way a consuming crate
//! would use them.

pub mod fixtures;

#[cfg(test)]
mod test;
