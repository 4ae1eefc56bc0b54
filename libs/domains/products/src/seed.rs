use crate::models::CreateProduct;

fn item(name: &str, description: &str, price: f64, stock: i32, category: &str) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
        stock,
        category: category.to_string(),
        is_active: true,
    }
}

/// A small demo catalog loaded when `SEED_CATALOG` is enabled.
pub fn demo_catalog() -> Vec<CreateProduct> {
    let mut discontinued = item(
        "Wired Earbuds",
        "Entry-level earbuds, no longer restocked",
        19.99,
        0,
        "Electronics",
    );
    discontinued.is_active = false;

    vec![
        item(
            "Mechanical Keyboard",
            "Tenkeyless board with hot-swappable switches",
            129.9,
            25,
            "Electronics",
        ),
        item(
            "Wireless Mouse",
            "Ergonomic mouse with silent clicks",
            39.5,
            80,
            "Electronics",
        ),
        item(
            "27\" Monitor",
            "QHD IPS panel, 144 Hz",
            329.0,
            12,
            "Electronics",
        ),
        item(
            "Laptop Sleeve",
            "Padded neoprene sleeve for 14\" laptops",
            24.99,
            60,
            "Laptop Accessories",
        ),
        item(
            "Standing Desk",
            "Electric height-adjustable desk",
            499.0,
            5,
            "Furniture",
        ),
        item(
            "Desk Lamp",
            "Dimmable LED lamp with USB charging port",
            45.0,
            40,
            "Home",
        ),
        discontinued,
    ]
}
