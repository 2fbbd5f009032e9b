//! Factory method.
//!
//! A [`Creator`] decides which [`Product`] to build; its shared business
//! logic in [`Creator::some_operation`] only sees the `Product` interface, so
//! any creator can stand in for any other. [`Factory`] turns a creator into a
//! [`Behavior`] whose output is a fresh product, which lets creators be
//! registered and picked by key like any other behavior.

use crate::{Behavior, BehaviorRegistry, Category};

/// The operations every product supports.
pub trait Product: Send + Sync {
    /// Describe the result of using this product.
    fn operation(&self) -> String;
}

/// The first concrete product.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}

/// The second concrete product.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}

/// Builds products and runs logic on top of them.
pub trait Creator: Send + Sync {
    /// Build the product this creator is responsible for.
    fn factory_method(&self) -> Box<dyn Product>;

    /// Business logic shared by all creators.
    ///
    /// Works with whatever product [`factory_method`](Self::factory_method)
    /// returns, through the [`Product`] interface only.
    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

/// Creates [`ConcreteProduct1`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteCreator1;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

/// Creates [`ConcreteProduct2`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

/// Client code that only knows the [`Creator`] interface.
pub fn client_code(creator: &dyn Creator) -> String {
    format!(
        "Client: I'm not aware of the creator's class, but it still works.\n{}",
        creator.some_operation()
    )
}

/// Adapts a [`Creator`] into a behavior that builds a new product each time
/// it is performed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Factory<C>(pub C);

impl<C> Behavior for Factory<C>
where
    C: Creator + 'static,
{
    type Output = Box<dyn Product>;

    fn perform(&self) -> Self::Output {
        self.0.factory_method()
    }
}

/// A registry of product factories keyed by product name.
pub type Factories = BehaviorRegistry<Category, Box<dyn Product>>;

/// Factories for both concrete products, under `"product1"` and `"product2"`.
pub fn factories() -> Factories {
    let factories = Factories::with_capacity(2);
    factories.register(Category::from_static("product1"), Factory(ConcreteCreator1));
    factories.register(Category::from_static("product2"), Factory(ConcreteCreator2));
    factories
}
