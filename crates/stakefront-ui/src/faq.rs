use crate::i18n::{t, Lang};
use crate::view::FaqItemView;

/// Single-open accordion over translated question/answer keys.
#[derive(Debug, Clone, Default)]
pub struct FaqPanel {
    entries: Vec<(&'static str, &'static str)>,
    open: Option<usize>,
}

impl FaqPanel {
    pub fn new(entries: Vec<(&'static str, &'static str)>) -> Self {
        Self { entries, open: None }
    }

    /// Opens entry `index`, closing any other; toggling the open entry closes it.
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn collapse(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    #[inline]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn view(&self, lang: Lang) -> Vec<FaqItemView> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (q, a))| FaqItemView {
                question: t(q, lang).to_string(),
                answer: self.is_open(i).then(|| t(a, lang).to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> FaqPanel {
        FaqPanel::new(vec![
            ("faq.what.q", "faq.what.a"),
            ("faq.lock.q", "faq.lock.a"),
            ("faq.rewards.q", "faq.rewards.a"),
        ])
    }

    #[test]
    fn opening_one_closes_the_other() {
        let mut faq = panel();
        faq.toggle(0);
        faq.toggle(2);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
    }

    #[test]
    fn toggling_open_entry_closes_it() {
        let mut faq = panel();
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut faq = panel();
        faq.toggle(1);
        faq.toggle(9);
        assert_eq!(faq.open_index(), Some(1));
    }

    #[test]
    fn view_hides_closed_answers() {
        let mut faq = panel();
        faq.toggle(1);
        let view = faq.view(Lang::En);
        assert_eq!(view.len(), 3);
        assert_eq!(view[0].answer, None);
        assert_eq!(view[1].question, "How long are tokens locked?");
        assert_eq!(
            view[1].answer.as_deref(),
            Some("Each pool states its lock period before you stake.")
        );

        faq.collapse();
        assert!(faq.view(Lang::En).iter().all(|item| item.answer.is_none()));
    }
}
