use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    // Column widths fit the widest cell
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let pad = |cell: &str, i: usize| {
        let w = widths.get(i).copied().unwrap_or(0);
        format!("{cell:<w$}")
    };

    let header: Vec<String> = headers.iter().enumerate().map(|(i, h)| pad(h, i)).collect();
    println!("{}", header.join("  "));

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", rule.join("  "));

    for row in &rows {
        let cells: Vec<String> = row.iter().enumerate().map(|(i, c)| pad(c, i)).collect();
        println!("{}", cells.join("  "));
    }
}
