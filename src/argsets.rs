pub struct ShowArgs {
    pub attr: String,
}

pub struct DecodeArgs {
    pub attr: String,
    pub raw: String,
}

pub struct EncodeArgs {
    pub attr: String,
    pub value: String,
}
