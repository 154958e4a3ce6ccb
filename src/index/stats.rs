use crate::index::suffix_index::SuffixIndex;
use crate::index::types::IndexStats;
use std::mem::size_of;

impl SuffixIndex {
    /// Summary of the built index
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            buffer_len: self.len() as u64,
            fragment_count: self.buffer().fragment_count() as u32,
            interval_count: self.interval_count() as u64,
            max_lcp: self.max_lcp(),
            child_entries: self.child_table().len() as u64,
            link_entries: self.suffix_links().len() as u64,
            element_groups: self.element_groups().len() as u64,
        }
    }
}

impl IndexStats {
    /// Rough resident size of the index in bytes
    ///
    /// Counts the buffer, both arrays and the table payloads; hash table
    /// overhead and group chains are not included.
    pub fn estimated_bytes(&self) -> u64 {
        // (interval, symbol) key + (interval, depth) value
        const CHILD_ENTRY: u64 = (size_of::<u32>() * 2 + 1 + size_of::<u32>() * 3) as u64;
        // interval key + (interval, depth) value
        const LINK_ENTRY: u64 = (size_of::<u32>() * 5) as u64;

        self.buffer_len * (1 + 2 * size_of::<u32>() as u64)
            + self.child_entries * CHILD_ENTRY
            + self.link_entries * LINK_ENTRY
    }
}

/// Format byte size to human readable
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::types::IndexConfig;

    #[test]
    fn test_stats_atat() {
        let index =
            SuffixIndex::from_fragments(&[[0u8, 1, 0, 1]], &IndexConfig::default()).unwrap();
        let stats = index.stats();

        assert_eq!(stats.buffer_len, 5);
        assert_eq!(stats.fragment_count, 1);
        assert_eq!(stats.interval_count, 3);
        assert_eq!(stats.max_lcp, 2);
        assert_eq!(stats.child_entries, 7);
        assert_eq!(stats.link_entries, 3);
        assert_eq!(stats.element_groups, 0);
        assert!(stats.estimated_bytes() > 0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }
}
