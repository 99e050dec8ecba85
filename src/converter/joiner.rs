use super::CaseStyle;

/// Join tokens under the casing rule of `style`
pub fn join<S: AsRef<str>>(tokens: &[S], style: CaseStyle) -> String {
    match style {
        CaseStyle::Kebab => join_lowercase(tokens, "-"),
        CaseStyle::Dot => join_lowercase(tokens, "."),
        CaseStyle::Camel => join_camel(tokens),
    }
}

fn join_lowercase<S: AsRef<str>>(tokens: &[S], separator: &str) -> String {
    tokens
        .iter()
        .map(|token| token.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_camel<S: AsRef<str>>(tokens: &[S]) -> String {
    let capacity = tokens.iter().map(|t| t.as_ref().len()).sum();
    let mut result = String::with_capacity(capacity);

    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if i == 0 {
            result.push_str(&token.to_lowercase());
            continue;
        }

        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }

    result
}
