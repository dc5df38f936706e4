/// Splits a document into block strings.
///
/// A block is a maximal run of lines none of which is blank, where a blank
/// line is empty or whitespace-only. One or more blank lines separate
/// blocks. Each block is trimmed of leading and trailing whitespace;
/// newlines inside a block are preserved. An empty document yields no
/// blocks.
pub fn split_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    for line in document.lines() {
        if line.trim().is_empty() {
            flush_run(&mut run, &mut blocks);
        } else {
            run.push(line);
        }
    }
    flush_run(&mut run, &mut blocks);
    blocks
}

fn flush_run(run: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    blocks.push(run.join("\n").trim().to_string());
    run.clear();
}
