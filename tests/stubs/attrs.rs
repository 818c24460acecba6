#![allow(dead_code)]
// Not every test binary uses every stub

pub const CUSTOM_ATTRS: &str = r#"
{
    "attributes": [
        {
            "id": 5367,
            "name": "SolarTemp",
            "doc": "Kollektortemperatur",
            "access": "read-only",
            "type": "double"
        },
        {
            "id": 7900,
            "name": "LueftungsStufe",
            "doc": "Lüftungsstufe",
            "access": "read/write",
            "type": { "enum": ["Aus", "Stufe 1", "Stufe 2", "Stufe 3"] }
        },
        {
            "id": 7901,
            "name": "WartungsDatum",
            "access": "write-only",
            "type": "date"
        }
    ]
}
"#;

pub const OVERRIDE_BUILTIN: &str = r#"
{
    "attributes": [
        {
            "id": 600,
            "name": "BurnerStatus",
            "doc": "Burner status",
            "access": "read-only",
            "type": { "enum": ["Off", "On"] }
        }
    ]
}
"#;

pub const BAD_ACCESS: &str = r#"
{
    "attributes": [
        { "id": 1, "name": "X", "access": "rw", "type": "double" }
    ]
}
"#;
