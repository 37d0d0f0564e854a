use fcontainers::FStack;

fn matching(c: char) -> Option<char> {
    match c {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn print_stack(stack: &FStack<char>) {
    if stack.is_empty() {
        println!("    (empty)");
        return;
    }
    let rendered: Vec<String> = stack.iter().rev().map(|c| c.to_string()).collect();
    println!("    {}", rendered.join(" <- "));
}

/// Returns `true` if every bracket in `s` is closed in the right order.
fn is_valid(s: &str) -> Result<bool, fcontainers::Error> {
    let mut stack = FStack::with_capacity(s.len().max(1))?;

    for c in s.chars() {
        if let Some(closer) = matching(c) {
            if stack.push(closer).is_err() {
                return Ok(false);
            }
            continue;
        }
        if stack.pop() != Some(c) {
            return Ok(false);
        }
    }

    print_stack(&stack);
    Ok(stack.is_empty())
}

fn main() -> Result<(), fcontainers::Error> {
    let cases = [
        ("()", true),
        ("()[]{}", true),
        ("(]", false),
        ("([)]", false),
        ("{[]}", true),
        ("((", false),
        ("", true),
    ];

    for (input, expected) in cases {
        let valid = is_valid(input)?;
        println!("{input:>8} -> {valid}");
        assert_eq!(valid, expected, "{input}");
    }

    Ok(())
}
