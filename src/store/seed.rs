//! Demo catalog data for local development and tests.

use rust_decimal_macros::dec;

use crate::models::{Category, Material, Supplier};
use crate::store::MemoryStore;

/// Loads the demo suppliers, categories, and materials into the store.
/// Skips seeding when catalog data is already present.
pub fn seed_demo_catalog(store: &MemoryStore) {
    if !store.is_empty_catalog() {
        return;
    }

    for (id, name, verified, location) in [
        (1, "Fresh Farm Co.", true, "Mumbai"),
        (2, "Green Valley Suppliers", true, "Delhi"),
        (3, "Spice Master Ltd.", false, "Chennai"),
        (4, "Quality Foods Inc.", true, "Bangalore"),
        (5, "Local Market Hub", false, "Pune"),
    ] {
        store.insert_supplier(Supplier {
            id,
            name: name.to_string(),
            verified,
            location: location.to_string(),
        });
    }

    for (id, name, icon) in [
        ("tomatoes", "Tomatoes", "\u{1F345}"),
        ("flour", "Flour", "\u{1F33E}"),
        ("oil", "Oil", "\u{1FAD2}"),
        ("spices", "Spices", "\u{1F336}\u{FE0F}"),
        ("onions", "Onions", "\u{1F9C5}"),
        ("rice", "Rice", "\u{1F33E}"),
        ("vegetables", "Vegetables", "\u{1F96C}"),
        ("meat", "Meat", "\u{1F969}"),
    ] {
        store.insert_category(Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        });
    }

    let materials = [
        Material {
            id: 1,
            name: "Fresh Tomatoes".into(),
            category: "tomatoes".into(),
            price: dec!(45),
            unit: "kg".into(),
            supplier_id: 1,
            image: "https://images.unsplash.com/photo-1546470427-227527c9e1eb?w=400&h=300&fit=crop".into(),
            in_stock: true,
            description: "Fresh red tomatoes, perfect for street food preparation".into(),
            group_price: dec!(38),
            min_group_quantity: 50,
        },
        Material {
            id: 2,
            name: "Wheat Flour".into(),
            category: "flour".into(),
            price: dec!(35),
            unit: "kg".into(),
            supplier_id: 2,
            image: "https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b?w=400&h=300&fit=crop".into(),
            in_stock: true,
            description: "Premium quality wheat flour for breads and rotis".into(),
            group_price: dec!(30),
            min_group_quantity: 100,
        },
        Material {
            id: 3,
            name: "Sunflower Oil".into(),
            category: "oil".into(),
            price: dec!(120),
            unit: "liter".into(),
            supplier_id: 4,
            image: "https://images.unsplash.com/photo-1474979266404-7eaacbcd87c5?w=400&h=300&fit=crop".into(),
            in_stock: true,
            description: "Pure sunflower oil for cooking and frying".into(),
            group_price: dec!(110),
            min_group_quantity: 20,
        },
        Material {
            id: 4,
            name: "Red Chili Powder".into(),
            category: "spices".into(),
            price: dec!(180),
            unit: "kg".into(),
            supplier_id: 3,
            image: "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=400&h=300&fit=crop".into(),
            in_stock: false,
            description: "Spicy red chili powder for authentic taste".into(),
            group_price: dec!(160),
            min_group_quantity: 10,
        },
        Material {
            id: 5,
            name: "Large Onions".into(),
            category: "onions".into(),
            price: dec!(30),
            unit: "kg".into(),
            supplier_id: 1,
            image: "https://images.unsplash.com/photo-1518977676601-b53f82aba655?w=400&h=300&fit=crop".into(),
            in_stock: true,
            description: "Fresh large onions for cooking base".into(),
            group_price: dec!(25),
            min_group_quantity: 100,
        },
        Material {
            id: 6,
            name: "Basmati Rice".into(),
            category: "rice".into(),
            price: dec!(85),
            unit: "kg".into(),
            supplier_id: 2,
            image: "https://images.unsplash.com/photo-1586201375761-83865001e31c?w=400&h=300&fit=crop".into(),
            in_stock: true,
            description: "Premium basmati rice for biryanis and pulao".into(),
            group_price: dec!(78),
            min_group_quantity: 50,
        },
        Material {
            id: 7,
            name: "Turmeric Powder".into(),
            category: "spices".into(),
            price: dec!(220),
            unit: "kg".into(),
            supplier_id: 3,
            image: "https://images.unsplash.com/photo-1615485500704-8e990f9900f7?w=400&h=300&fit=crop".into(),
            in_stock: true,
            description: "Pure turmeric powder for color and flavor".into(),
            group_price: dec!(200),
            min_group_quantity: 5,
        },
        Material {
            id: 8,
            name: "Green Vegetables Mix".into(),
            category: "vegetables".into(),
            price: dec!(55),
            unit: "kg".into(),
            supplier_id: 5,
            image: "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=400&h=300&fit=crop".into(),
            in_stock: true,
            description: "Fresh mixed green vegetables".into(),
            group_price: dec!(48),
            min_group_quantity: 30,
        },
        Material {
            id: 9,
            name: "Chicken (Fresh)".into(),
            category: "meat".into(),
            price: dec!(280),
            unit: "kg".into(),
            supplier_id: 4,
            image: "https://images.unsplash.com/photo-1604503468506-a8da13d82791?w=400&h=300&fit=crop".into(),
            in_stock: true,
            description: "Fresh chicken for non-veg preparations".into(),
            group_price: dec!(260),
            min_group_quantity: 20,
        },
        Material {
            id: 10,
            name: "Cumin Seeds".into(),
            category: "spices".into(),
            price: dec!(350),
            unit: "kg".into(),
            supplier_id: 3,
            image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop".into(),
            in_stock: true,
            description: "Aromatic cumin seeds for seasoning".into(),
            group_price: dec!(320),
            min_group_quantity: 5,
        },
    ];

    for material in materials {
        store.insert_material(material);
    }
}
