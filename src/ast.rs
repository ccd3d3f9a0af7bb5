/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: integers, booleans, and strings. It is used in the AST to
/// represent literal expressions and is converted into a runtime value when
/// evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal: the text between the quotes, with no escape
    /// sequences.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expression` covers every value-producing construct, from literals and
/// identifiers to conditionals, function literals, calls, and indexing. The
/// language is expression-oriented: `if` is an expression, function literals
/// are first-class values, and blocks yield the value of their last
/// statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A literal value (integer, boolean, or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
    },
    /// A prefix operation (e.g. `!ok` or `-x`).
    Prefix {
        /// The prefix operator to apply.
        op:    PrefixOperator,
        /// The operand expression.
        right: Box<Self>,
    },
    /// An infix operation (arithmetic, comparison, or equality).
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Conditional expression with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, if present.
        alternative: Option<Block>,
    },
    /// Function literal (e.g. `fn(x, y) { x + y }`).
    Function {
        /// The parameter names.
        parameters: Vec<String>,
        /// The body evaluated when the function is called.
        body:       Block,
    },
    /// Call expression. The callee is an arbitrary expression, so function
    /// literals and returned closures can be called directly.
    Call {
        /// The expression being called.
        callee:    Box<Self>,
        /// Arguments to the call, evaluated left to right.
        arguments: Vec<Self>,
    },
    /// Array literal expression.
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
    },
    /// Hash literal expression. Pair order is preserved.
    Hash {
        /// Key/value expression pairs.
        pairs: Vec<(Self, Self)>,
    },
    /// Indexing expression (e.g. `arr[2]` or `h["key"]`).
    Index {
        /// The array or hash being indexed.
        container: Box<Self>,
        /// The index to access.
        index:     Box<Self>,
    },
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as `if`/`else` branches and function bodies. A block
/// evaluates to the value of its last statement, unless a `return` cuts it
/// short.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// Represents a single statement.
///
/// The language has two pure statement forms, `let` and `return`; everything
/// else is an expression used in statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding declaration using `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value.
        value: Expression,
    },
    /// An early exit from the enclosing function or program.
    Return {
        /// The returned value.
        value: Expression,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expression: Expression,
    },
}

/// The root node produced by the parser: the full sequence of top-level
/// statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents an infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (e.g. `!ok`).
    Not,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

// The Display impls below reproduce a canonical, fully parenthesized surface
// form used for debugging and golden tests. At the expression level the
// printed form reparses to the same tree; blocks print without their braces,
// so `if` and `fn` nodes are printable but not reparseable.

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        Ok(())
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        Ok(())
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expression } => write!(f, "{expression}"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Identifier { name } => write!(f, "{name}"),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if {condition} {consequence}")?;

                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }

                Ok(())
            },
            Self::Function { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_separated(f, arguments)?;
                write!(f, ")")
            },
            Self::Array { elements } => {
                write!(f, "[")?;
                write_separated(f, elements)?;
                write!(f, "]")
            },
            Self::Hash { pairs } => {
                write!(f, "{{")?;

                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}:{value}")?;
                }

                write!(f, "}}")
            },
            Self::Index { container, index } => write!(f, "({container}[{index}])"),
        }
    }
}

fn write_separated(f: &mut std::fmt::Formatter<'_>, expressions: &[Expression]) -> std::fmt::Result {
    for (index, expression) in expressions.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }

        write!(f, "{expression}")?;
    }

    Ok(())
}
