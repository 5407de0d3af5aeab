use serde::Serialize;

/// One scored question, in scoring order.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionScore {
    pub question: String,
    pub average_precision: f64,
}

/// Summary of one evaluation run, serializable for machine consumption.
///
/// `questions` holds only questions that were actually scored; questions
/// missing from the predictions appear in `gold_questions` alone.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    pub gold_questions: usize,
    pub predicted_questions: usize,
    pub questions: Vec<QuestionScore>,
    pub mean_average_precision: f64,
}

impl EvalReport {
    pub fn new(gold_questions: usize, predicted_questions: usize) -> Self {
        Self {
            gold_questions,
            predicted_questions,
            questions: Vec::new(),
            mean_average_precision: 0.0,
        }
    }

    /// Record one scored question. Call order defines report order.
    pub fn record(&mut self, question: &str, average_precision: f64) {
        self.questions.push(QuestionScore {
            question: question.to_string(),
            average_precision,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_questions_in_recording_order() {
        let mut report = EvalReport::new(2, 1);
        report.record("q2", 0.5);
        report.record("q1", 1.0);
        report.mean_average_precision = 0.75;

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"gold_questions\":2"));
        assert!(json.contains("\"mean_average_precision\":0.75"));
        let q2_at = json.find("\"q2\"").unwrap();
        let q1_at = json.find("\"q1\"").unwrap();
        assert!(q2_at < q1_at);
    }
}
