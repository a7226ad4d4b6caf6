use serde_derive::Serialize;

#[derive(Debug, Serialize)]
pub struct Product {
    name: String,
    manufacturer: String,
    price: i32,
    summary: String,
}
impl Product {
    #[allow(dead_code)]
    pub fn new() -> Product {
        Product {
            name: "Moto G".to_owned(),
            manufacturer: "Motorala".to_owned(),
            summary: "A phone".to_owned(),
            price: 100,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Field {
    name: String,
    ty: String,
}
impl Field {
    #[allow(dead_code)]
    pub fn new(name: &str, ty: &str) -> Field {
        Field { name: name.to_owned(), ty: ty.to_owned() }
    }
}

/// A struct definition in the shape code generators feed to the engine
#[allow(dead_code)]
pub const STRUCT_TEMPLATE: &str = "struct <name> {
<#fields>    <field_name>: <field_type>,
</fields>}
";
