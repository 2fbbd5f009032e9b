//! Ready-made behaviors and registries.
//!
//! | Module      | Contents                                                           |
//! |-------------|--------------------------------------------------------------------|
//! | [`animals`] | `Roar`, `Squeak`, `Hiss`, the [`zoo`](animals::zoo) registry, and the naive `branching` version |
//! | [`ducks`]   | Quack strategies and a `Duck` that receives one through its constructor |
//! | [`factory`] | `Creator` / `Product` factory method, adaptable into a registry via `Factory` |

pub mod animals;
pub mod ducks;
pub mod factory;
