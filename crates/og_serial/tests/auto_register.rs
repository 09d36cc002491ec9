//! Registration through `#[reflect(auto_register)]` and `impl_auto_register!`.
#![cfg(feature = "auto_register")]

use core::any::TypeId;

use og_reflect::derive::{Reflect, impl_auto_register};
use og_reflect::registry::TypeRegistry;
use og_reflect::{Shared, share};
use og_serial::ObjectSerializer;

#[derive(Reflect, Default)]
#[reflect(auto_register, type_path = "workshop::Gadget")]
pub struct Gadget {
    pub serial: u32,
    pub part: Option<Shared<Part>>,
}

#[derive(Reflect, Default)]
#[reflect(type_path = "workshop::Part")]
pub struct Part {
    pub weight: f32,
}

#[derive(Reflect, Default)]
#[reflect(type_path = "workshop::Spare")]
pub struct Spare {
    pub count: u16,
}

impl_auto_register!(Spare);

#[test]
fn submitted_types_are_registered() {
    let mut registry = TypeRegistry::empty();
    assert!(registry.register_auto() >= 2);

    assert!(registry.contains(TypeId::of::<Gadget>()));
    assert!(registry.contains(TypeId::of::<Spare>()));
    // Dependencies of submitted types.
    assert!(registry.contains(TypeId::of::<Part>()));
    assert!(registry.contains(TypeId::of::<f32>()));

    let before = registry.len();
    registry.register_auto();
    assert_eq!(registry.len(), before);
}

#[test]
fn auto_registered_round_trip() {
    let mut registry = TypeRegistry::new();
    registry.register_auto();
    let serializer = ObjectSerializer::new(registry);

    let gadget = share(Gadget {
        serial: 77,
        part: Some(share(Part { weight: 0.25 })),
    });
    let mut buffer = Vec::new();
    serializer.serialize_object(&gadget, &mut buffer).unwrap();

    let back: Shared<Gadget> = serializer.deserialize_object(&buffer[..]).unwrap();
    assert_eq!(back.borrow().serial, 77);
    let part = back.borrow().part.clone().unwrap();
    assert_eq!(part.borrow().weight, 0.25);
}
