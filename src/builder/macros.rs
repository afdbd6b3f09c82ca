//! Macros for declaring automata as literals.

/// Declare a [`DfaConfig`](crate::core::DfaConfig) in one expression.
///
/// States are written as bare identifiers and become string labels;
/// symbols are `char` expressions. The macro produces an unvalidated
/// config — pass it to [`Dfa::new`](crate::core::Dfa::new) to get an
/// executable automaton.
///
/// # Example
///
/// ```
/// use acceptor::core::Dfa;
/// use acceptor::dfa;
///
/// // Strings containing the substring "ab".
/// let config = dfa! {
///     states: [start, seen_a, seen_ab],
///     alphabet: ['a', 'b'],
///     start: start,
///     accepting: [seen_ab],
///     transitions: {
///         start: { 'a' => seen_a, 'b' => start },
///         seen_a: { 'a' => seen_a, 'b' => seen_ab },
///         seen_ab: { 'a' => seen_ab, 'b' => seen_ab },
///     }
/// };
///
/// let dfa = Dfa::new(config).unwrap();
/// assert!(dfa.accepts("bab"));
/// ```
#[macro_export]
macro_rules! dfa {
    (
        states: [$($state:ident),* $(,)?],
        alphabet: [$($symbol:expr),* $(,)?],
        start: $start:ident,
        accepting: [$($accepting:ident),* $(,)?],
        transitions: {
            $(
                $from:ident: { $($on:expr => $to:ident),* $(,)? }
            ),* $(,)?
        }
    ) => {
        $crate::core::DfaConfig {
            states: vec![$(stringify!($state).to_string()),*],
            alphabet: vec![$($symbol),*],
            transitions: ::std::collections::HashMap::from([
                $(
                    (
                        stringify!($from).to_string(),
                        ::std::collections::HashMap::from([
                            $(($on, stringify!($to).to_string())),*
                        ]),
                    )
                ),*
            ]),
            start_state: stringify!($start).to_string(),
            accepting_states: vec![$(stringify!($accepting).to_string()),*],
        }
    };
}
