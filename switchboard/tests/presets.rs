//! Strategy injection and factory method, driven through registries.

use switchboard::{
    Category,
    presets::{
        ducks::{Duck, NormalQuack, SqueakQuack, pond},
        factory::{ConcreteCreator1, Creator, Factory, Product, client_code, factories},
    },
};

#[test]
fn test_ducks_from_pond() {
    let pond = pond();
    let quacks: Vec<_> = ["mallard", "decoy", "rubber"]
        .into_iter()
        .map(|kind| Duck::from_pond(&pond, kind).unwrap().behavior())
        .collect();

    assert_eq!(quacks, ["Quack", "<< Silence >>", "Squeak"]);
}

#[test]
fn test_new_duck_kind_without_touching_duck() {
    let pond = pond();
    pond.register(Category::from_static("goose"), || "Honk");

    assert_eq!(Duck::from_pond(&pond, "goose").unwrap().behavior(), "Honk");
}

#[test]
fn test_ducks_share_one_strategy() {
    let mallard = Duck::new(NormalQuack);
    let twin = mallard.clone();
    let rubber = Duck::new(SqueakQuack);

    assert_eq!(mallard.behavior(), twin.behavior());
    assert_ne!(mallard.behavior(), rubber.behavior());
}

#[test]
fn test_client_code_with_first_creator() {
    assert_eq!(
        client_code(&ConcreteCreator1),
        "Client: I'm not aware of the creator's class, but it still works.\n\
         Creator: The same creator's code has just worked with {Result of the ConcreteProduct1}"
    );
}

#[test]
fn test_registered_creator_used_by_key() {
    struct Loud;

    impl Product for Loud {
        fn operation(&self) -> String {
            "{LOUD RESULT}".to_string()
        }
    }

    struct Shouting;

    impl Creator for Shouting {
        fn factory_method(&self) -> Box<dyn Product> {
            Box::new(Loud)
        }
    }

    let factories = factories();
    factories.register(Category::from_static("loud"), Factory(Shouting));

    let factory = factories.resolve("loud").unwrap();
    assert_eq!(factory.perform().operation(), "{LOUD RESULT}");
    assert!(Shouting.some_operation().ends_with("{LOUD RESULT}"));
}
