//! Output formatting for address reports.
//!
//! This module handles formatting and printing:
//! - [`csv`] - CSV rows for the summary, sub-block and host pages
//! - [`terminal`] - Field formatting and network/host colouring

mod csv;
mod terminal;

pub use csv::{
    host_row, page_footer, print_host_page, print_subnet_page, print_summary, subnet_row,
    summary_rows,
};
pub use terminal::{colored_binary, colored_ip, format_field};
