use std::collections::HashMap;

/// Type alias for a variable binding used during evaluation.
///
/// This represents a mapping that:
/// - Associates each variable name with exactly one value
/// - May be empty, in which case only exact expressions evaluate successfully
/// - Is always passed explicitly, there is no implicit default environment
pub type Environment = HashMap<String, f64>;
