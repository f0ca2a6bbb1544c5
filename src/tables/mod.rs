/*!
Truth tables over a knowledge base and its queries.

A truth table is the full enumeration made visible: one row per assignment over the joint symbol set, in enumeration order, with a column per symbol, a column for the knowledge base, and a column per query.
Generation walks the same [enumeration](crate::procedures::enumerate) the model checker walks, so the rows underlying a table and a [Verdict](crate::reports::Verdict) agree.

Booleans are encoded `0`/`1` throughout --- in the rendered grid and in the CSV export --- one column per symbol, `KB`, then one column per query label, which is the recommended interchange form.

Generation is refused beyond the configured [symbol ceiling](crate::config::Config::symbol_ceiling), as a table over *n* symbols has 2^*n* rows.
*/

use std::io;

use crate::{
    builder::Puzzle,
    config::Config,
    misc::log::targets::{self},
    procedures::enumerate::Models,
    structures::{assignment::Assignment, sentence::Sentence},
    types::err::{EvaluationError, TableError},
};

/// The header of the knowledge base column.
const KB_HEADER: &str = "KB";

/// One row of a truth table: an assignment and the values it gives the sentences of interest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// The value of each symbol, in the table's symbol order.
    pub values: Vec<bool>,

    /// The value of the knowledge base on the assignment.
    pub knowledge_base: bool,

    /// The value of each query on the assignment, in query order.
    pub queries: Vec<bool>,
}

/// A truth table: every assignment over the joint symbol set, against the knowledge base and each query.
#[derive(Clone, Debug)]
pub struct TruthTable {
    /// The symbols of the table, in sorted order.
    symbols: Vec<String>,

    /// The label of each query column, in query order.
    query_labels: Vec<String>,

    /// The question behind each query column, in query order, when known.
    ///
    /// Tables built from a [Puzzle] carry the questions for the legend; tables built from bare sentences have none.
    questions: Vec<String>,

    /// The rows, in enumeration order.
    rows: Vec<Row>,
}

impl TruthTable {
    /// The table for a knowledge base and a sequence of labelled queries.
    ///
    /// The symbol set is the union over the knowledge base and every query, so each row is total over every sentence evaluated.
    pub fn generate(
        config: &Config,
        knowledge_base: &Sentence,
        queries: &[(&str, &Sentence)],
    ) -> Result<Self, TableError> {
        let mut symbols = knowledge_base.symbols();
        for (_, query) in queries {
            symbols.append(&mut query.symbols());
        }

        if symbols.len() > config.symbol_ceiling {
            return Err(TableError::SymbolCeiling {
                symbols: symbols.len(),
                ceiling: config.symbol_ceiling,
            });
        }

        let symbols = symbols.into_iter().collect::<Vec<_>>();

        let mut rows = Vec::new();
        for assignment in Models::over(&symbols.iter().cloned().collect()) {
            let values = symbols
                .iter()
                .map(|symbol| {
                    assignment
                        .value_of(symbol)
                        .ok_or_else(|| EvaluationError::UndefinedSymbol(symbol.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let mut query_values = Vec::with_capacity(queries.len());
            for (_, query) in queries {
                query_values.push(query.evaluate(&assignment)?);
            }

            rows.push(Row {
                values,
                knowledge_base: knowledge_base.evaluate(&assignment)?,
                queries: query_values,
            });
        }

        log::debug!(target: targets::TABLE,
            "Truth table generated: {} symbols, {} rows", symbols.len(), rows.len());

        Ok(TruthTable {
            symbols,
            query_labels: queries.iter().map(|(label, _)| label.to_string()).collect(),
            questions: Vec::new(),
            rows,
        })
    }

    /// The table for a puzzle: its knowledge base against its queries, columns labelled as the queries are.
    ///
    /// The puzzle's questions are carried over, so the [rendered](Self::render) legend explains each query column.
    pub fn of_puzzle(config: &Config, puzzle: &Puzzle) -> Result<Self, TableError> {
        let queries = puzzle
            .queries
            .iter()
            .map(|query| (query.label.as_str(), &query.sentence))
            .collect::<Vec<_>>();

        let mut table = Self::generate(config, &puzzle.knowledge_base(), &queries)?;
        table.questions = puzzle
            .queries
            .iter()
            .map(|query| query.question.clone())
            .collect();

        Ok(table)
    }

    /// The column headers: symbols, then `KB`, then the query labels.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = self.symbols.clone();
        headers.push(KB_HEADER.to_string());
        headers.extend(self.query_labels.iter().cloned());
        headers
    }

    /// The rows of the table, in enumeration order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The rows on which the knowledge base is true --- the models of the knowledge base.
    pub fn satisfying_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.knowledge_base)
    }

    /// The table as an aligned text grid, `0`/`1` cells under the headers, with a legend below.
    ///
    /// The legend reads out the encoding, the `KB` column, and --- for tables built [from a puzzle](Self::of_puzzle) --- the question behind each query column.
    pub fn render(&self) -> String {
        let headers = self.headers();
        let widths = headers
            .iter()
            .map(|header| header.chars().count())
            .collect::<Vec<_>>();

        let mut grid = String::new();

        grid.push_str(&headers.join("  "));
        grid.push('\n');

        let rule_length = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        grid.push_str(&"-".repeat(rule_length));
        grid.push('\n');

        for row in &self.rows {
            let cells = Self::flatten(row)
                .enumerate()
                .map(|(index, value)| format!("{:>width$}", value as u8, width = widths[index]))
                .collect::<Vec<_>>();
            grid.push_str(&cells.join("  "));
            grid.push('\n');
        }

        grid.push_str("\nLegend:\n");
        grid.push_str("  0 = false, 1 = true\n");
        grid.push_str("  KB = the knowledge base (every premise)\n");
        for (label, question) in self.query_labels.iter().zip(&self.questions) {
            grid.push_str(&format!("  {label} = {question}\n"));
        }

        grid
    }

    /// Write the table as CSV: a header row, then `0`/`1` cells, in enumeration order.
    pub fn write_csv(&self, writer: &mut impl io::Write) -> io::Result<()> {
        writeln!(writer, "{}", self.headers().join(","))?;

        for row in &self.rows {
            let cells = Self::flatten(row)
                .map(|value| (value as u8).to_string())
                .collect::<Vec<_>>();
            writeln!(writer, "{}", cells.join(","))?;
        }

        Ok(())
    }

    /// The cells of a row in column order: symbol values, the knowledge base, the queries.
    fn flatten(row: &Row) -> impl Iterator<Item = bool> + '_ {
        row.values
            .iter()
            .copied()
            .chain(std::iter::once(row.knowledge_base))
            .chain(row.queries.iter().copied())
    }
}
