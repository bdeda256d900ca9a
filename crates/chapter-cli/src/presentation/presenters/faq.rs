use chapter_types::FaqEntry;

use crate::presentation::view_models::{CommandResultViewModel, FaqEntryViewModel, FaqViewModel};

pub fn present_faq(entries: &[FaqEntry]) -> CommandResultViewModel<FaqViewModel> {
    CommandResultViewModel::new(FaqViewModel {
        entries: entries
            .iter()
            .map(|e| FaqEntryViewModel {
                id: e.id.clone(),
                question: e.question.clone(),
                answer: e.answer.clone(),
            })
            .collect(),
    })
}
