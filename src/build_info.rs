/// Build description as a small JSON object.
pub fn report(name: &str) -> String {
    format!(
        "{{\n  \"name\": \"{}\",\n  \"version\": \"{}\",\n  \
         \"git_describe\": \"{}\",\n  \"git_hash\": \"{}\",\n  \
         \"puffin\": {}\n}}",
        name,
        env!("CARGO_PKG_VERSION"),
        env!("GIT_DESCRIBE"),
        env!("GIT_HASH"),
        cfg!(feature = "profile-with-puffin"),
    )
}

pub fn print_report(name: &str) {
    println!("{}", report(name));
}
