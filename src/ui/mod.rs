/// UI layer: panels (sidebar, top bar, value boxes), chart, and data table.
pub mod panels;
pub mod plot;
pub mod table;
