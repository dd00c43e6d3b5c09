/// Everything the user can ask the dashboard to do
///
/// Key events are mapped to actions in `keys`, and `App::reduce` applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
}
