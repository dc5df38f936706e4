/// The structural type of a block. Mutually exclusive; ties are broken by
/// the priority order in [`classify_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Classifies a block string. Rules are tested in priority order — Heading,
/// Code, Quote, UnorderedList, OrderedList — and the first match wins;
/// Paragraph is the fallback. Classification never fails.
///
/// Each rule is an explicit line scan so classification is linear in the
/// block length.
pub fn classify_block(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }
    if is_code(block) {
        return BlockType::Code;
    }
    if is_quote(block) {
        return BlockType::Quote;
    }
    if is_unordered_list(block) {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

/// A heading is a single line of 1-6 `#`, one space, then non-empty text.
/// Seven or more `#` disqualifies.
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    if block.contains('\n') {
        return None;
    }
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let text = block[hashes..].strip_prefix(' ')?;
    if text.is_empty() {
        return None;
    }
    Some(hashes as u8)
}

/// A code block starts and ends with exactly three backticks and contains
/// no other backtick between the fences.
fn is_code(block: &str) -> bool {
    // len >= 7 keeps the two fences distinct and the interior non-empty.
    block.len() >= 7
        && block.starts_with("```")
        && block.ends_with("```")
        && !block[3..block.len() - 3].contains('`')
}

fn is_quote(block: &str) -> bool {
    block.lines().all(|line| line.starts_with('>'))
}

fn is_unordered_list(block: &str) -> bool {
    block
        .lines()
        .all(|line| line.starts_with("* ") || line.starts_with("- "))
}

/// Every line must be `N. text` with N starting at 1 and incrementing by
/// exactly 1. Any gap or wrong start disqualifies the whole block.
fn is_ordered_list(block: &str) -> bool {
    for (i, line) in block.lines().enumerate() {
        match ordered_prefix(line) {
            Some(number) if number == i + 1 => {}
            _ => return false,
        }
    }
    true
}

/// Parses the `N. ` prefix of an ordered-list line, if present.
pub(crate) fn ordered_prefix(line: &str) -> Option<usize> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || !line[digits..].starts_with(". ") {
        return None;
    }
    line[..digits].parse().ok()
}
