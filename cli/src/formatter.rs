use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use tally::{format_result, Evaluation, Postfix, StepAction};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_value(&self, value: f64) -> String {
        format_result(value)
    }

    pub fn format_postfix(&self, postfix: &Postfix) -> String {
        format!("postfix: {}", postfix)
    }

    /// One row per consumed token: the token, what happened, and the operand
    /// stack afterwards.
    pub fn format_steps(&self, evaluation: &Evaluation) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Token").set_alignment(CellAlignment::Left),
            Cell::new("Action").set_alignment(CellAlignment::Left),
            Cell::new("Stack").set_alignment(CellAlignment::Left),
        ]));

        for (i, step) in evaluation.steps.iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                Cell::new(&step.token),
                Cell::new(self.format_action(&step.action)),
                Cell::new(self.format_stack(&step.stack)),
            ]));
        }

        format!("{}\n", table)
    }

    fn format_action(&self, action: &StepAction) -> String {
        match action {
            StepAction::Push { value } => format!("push {}", value),
            StepAction::Apply {
                operator,
                left,
                right,
                result,
            } => format!("{} {} {} = {}", left, operator, right, result),
        }
    }

    fn format_stack(&self, stack: &[f64]) -> String {
        let values: Vec<String> = stack.iter().map(|v| v.to_string()).collect();
        format!("[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally::Engine;

    #[test]
    fn test_format_steps_lists_every_token() {
        let evaluation = Engine::new().evaluate_with_steps("2+3*4").unwrap();
        let output = Formatter::default().format_steps(&evaluation);
        assert!(output.contains("push 2"));
        assert!(output.contains("3 * 4 = 12"));
        assert!(output.contains("2 + 12 = 14"));
        assert!(output.contains("[2, 12]"));
    }

    #[test]
    fn test_format_value_and_postfix() {
        let formatter = Formatter::default();
        assert_eq!(formatter.format_value(2.5), "2.500000");
        let postfix = Engine::new().compile("(1+2)*3").unwrap();
        assert_eq!(formatter.format_postfix(&postfix), "postfix: 1 2 + 3 *");
    }
}
