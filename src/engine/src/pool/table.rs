/// Raw, untyped player table as handed over by the data-loading layer.
/// Cells are kept as text; an empty cell is a missing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PlayerTable {
    pub fn new(headers: Vec<String>) -> Self {
        PlayerTable {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        PlayerTable { headers, rows }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn position(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}
