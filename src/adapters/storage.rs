use crate::core::graph::DirectedGraph;
use crate::core::{FileWriter, Page};
use crate::domain::model::PageRow;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

const CSV_COLUMNS: [&str; 3] = ["page_name", "outgoing_links", "local_html_path"];

/// Writes page HTML, the pages CSV and the optional DOT graph to local disk.
#[derive(Debug, Clone)]
pub struct FilesystemWriter {
    pages_csv: String,
    html_dir: String,
    graph_dot: Option<String>,
}

impl FilesystemWriter {
    pub fn new(pages_csv: String, html_dir: String, graph_dot: Option<String>) -> Self {
        Self {
            pages_csv,
            html_dir,
            graph_dot,
        }
    }
}

/// Page names may contain path separators, which must not become directories.
fn file_stem(page_name: &str) -> String {
    page_name.replace('/', "%2F").replace('\\', "%5C")
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[async_trait]
impl FileWriter for FilesystemWriter {
    async fn write_html(&self, page_name: &str, html: &str) -> Result<String> {
        let filepath = Path::new(&self.html_dir).join(format!("{}.html", file_stem(page_name)));

        fs::create_dir_all(&self.html_dir)?;
        fs::write(&filepath, html)?;

        Ok(filepath.to_string_lossy().into_owned())
    }

    async fn write_pages_csv(&self, pages: &[Page]) -> Result<String> {
        let path = Path::new(&self.pages_csv);
        ensure_parent(path)?;

        let mut sorted: Vec<&Page> = pages.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(CSV_COLUMNS)?;
        for page in sorted {
            writer.serialize(PageRow::from(page))?;
        }
        writer.flush()?;

        Ok(self.pages_csv.clone())
    }

    async fn write_graph_dot(&self, graph: &DirectedGraph) -> Result<Option<String>> {
        let Some(graph_dot) = &self.graph_dot else {
            return Ok(None);
        };

        let path = Path::new(graph_dot);
        ensure_parent(path)?;

        let mut file = std::io::BufWriter::new(fs::File::create(path)?);
        graph.write_dot(&mut file)?;
        std::io::Write::flush(&mut file)?;

        Ok(Some(graph_dot.clone()))
    }
}
