/// Strip surrounding whitespace and drop every whitespace character inside.
pub fn normalize(input: &str) -> String {
    input.trim().chars().filter(|c| !c.is_whitespace()).collect()
}
