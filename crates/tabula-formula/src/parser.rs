//! Formula parser
//!
//! A shunting-yard parser over the token stream. All of its bookkeeping lives
//! in one [`ParserState`]: the output stack of finished nodes and pending
//! argument slots, the marker stack of operators, open parens and function
//! calls, the per-call argument counts, and the `infix` flag that tells an
//! operand position from an operator position.
//!
//! Literals are materialized while parsing, through the context's number and
//! range providers.

use crate::ast::{Associativity, Expr, Operator};
use crate::context::{Context, LiteralFallback};
use crate::error::{FormulaError, FormulaResult, ParseError};
use crate::token::{Token, TokenKind, Tokens};
use crate::tokenizer::{tokenize, tokenize_reader};
use crate::value::{parse_logical, Model, Value};
use std::io::Read;
use tabula_core::CellError;

/// A parsed formula and the non-fatal diagnostics collected on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<M: Model> {
    pub expr: Expr<M>,
    /// Lexical faults, rejected literals and unknown names
    pub errors: Vec<ParseError>,
}

/// Parse cell text into an expression tree
///
/// Structural faults (unbalanced parentheses, missing operands, misplaced
/// separators) fail with [`FormulaError::Parse`] carrying every diagnostic
/// gathered so far. Anything else is reported in [`Parsed::errors`] next to a
/// usable tree.
pub fn parse<M: Model>(source: &str, ctx: &Context<'_, M>) -> FormulaResult<Parsed<M>> {
    parse_tokens(tokenize(source), ctx)
}

/// Parse cell text read from a UTF-8 byte stream
pub fn parse_reader<M: Model, R: Read>(
    reader: R,
    ctx: &Context<'_, M>,
) -> FormulaResult<Parsed<M>> {
    parse_tokens(tokenize_reader(reader), ctx)
}

/// Parse an already tokenized formula
pub fn parse_tokens<M: Model>(tokens: Tokens, ctx: &Context<'_, M>) -> FormulaResult<Parsed<M>> {
    let Tokens { tokens, errors } = tokens;
    tracing::debug!(tokens = tokens.len(), lexical_errors = errors.len(), "parsing formula");

    let mut state = ParserState::new(ctx, errors);
    match state.run(tokens) {
        Ok(expr) => {
            if !state.errors.is_empty() {
                tracing::debug!(diagnostics = state.errors.len(), "formula parsed with diagnostics");
            }
            Ok(Parsed {
                expr,
                errors: state.errors,
            })
        }
        Err(fault) => {
            tracing::debug!(position = fault.position, message = %fault.message, "formula rejected");
            let mut errors = state.errors;
            errors.push(fault);
            Err(FormulaError::Parse(errors))
        }
    }
}

/// Deepest expression tree the parser builds
///
/// Evaluation walks the tree recursively, so nesting is bounded here.
pub const MAX_NESTING: usize = 256;

/// Entry on the output stack
enum Slot<M: Model> {
    /// Argument slot opened by a call or a `,`, not yet filled
    Pending,
    /// A finished subtree and its height
    Node(Expr<M>, usize),
}

/// Entry on the marker stack; each carries its token position
enum Marker {
    Operator(Operator, usize),
    Open(usize),
    Function(String, usize),
}

struct ParserState<'c, 'a, M: Model> {
    ctx: &'c Context<'a, M>,
    output: Vec<Slot<M>>,
    markers: Vec<Marker>,
    arg_counts: Vec<usize>,
    /// The last token completed an operand
    infix: bool,
    /// Position just past the last token, for end-of-input faults
    end: usize,
    errors: Vec<ParseError>,
}

impl<'c, 'a, M: Model> ParserState<'c, 'a, M> {
    fn new(ctx: &'c Context<'a, M>, errors: Vec<ParseError>) -> Self {
        Self {
            ctx,
            output: Vec::new(),
            markers: Vec::new(),
            arg_counts: Vec::new(),
            infix: false,
            end: 0,
            errors,
        }
    }

    fn run(&mut self, tokens: Vec<Token>) -> Result<Expr<M>, ParseError> {
        let mut tokens = tokens.into_iter();
        while let Some(token) = tokens.next() {
            self.end = token.position + token.text.chars().count();
            match token.kind {
                TokenKind::Function => {
                    let open = tokens.next();
                    if !matches!(open, Some(Token { kind: TokenKind::Open, .. })) {
                        return Err(ParseError::new(
                            token.position,
                            format!("expected '(' after '{}'", token.text),
                        ));
                    }
                    self.function(token)?;
                }
                TokenKind::Operator => self.operator(token)?,
                TokenKind::Separator => self.separator(token.position)?,
                TokenKind::Open => self.open(token.position)?,
                TokenKind::Close => self.close(token.position)?,
                _ => self.operand(token)?,
            }
        }
        self.finish()
    }

    fn operand(&mut self, token: Token) -> Result<(), ParseError> {
        if self.infix {
            if token.kind != TokenKind::Range {
                return Err(ParseError::new(
                    token.position,
                    format!("unexpected '{}' after an operand", token.text),
                ));
            }
            // `A1 B2`: adjacent references intersect
            self.push_operator(Operator::Intersection, token.position)?;
        }
        let value = self.materialize(&token);
        self.emit(Expr::Literal(value), 1);
        self.infix = true;
        Ok(())
    }

    fn function(&mut self, token: Token) -> Result<(), ParseError> {
        if self.infix {
            return Err(ParseError::new(
                token.position,
                format!("unexpected call to '{}' after an operand", token.text),
            ));
        }
        self.markers
            .push(Marker::Function(token.text.to_lowercase(), token.position));
        self.arg_counts.push(1);
        self.output.push(Slot::Pending);
        Ok(())
    }

    fn operator(&mut self, token: Token) -> Result<(), ParseError> {
        let op = token.operator.ok_or_else(|| {
            ParseError::new(token.position, format!("unknown operator '{}'", token.text))
        })?;

        let op = match (op, self.infix) {
            (Operator::Subtraction, false) => Operator::UnaryNegation,
            // unary plus is the identity
            (Operator::Addition, false) => return Ok(()),
            (op, false) => {
                return Err(ParseError::new(
                    token.position,
                    format!("missing operand before '{}'", op),
                ))
            }
            (op, true) => op,
        };

        self.push_operator(op, token.position)?;
        if op.is_postfix() {
            // `%` applies to what precedes it; an operator must follow
            self.infix = true;
        }
        Ok(())
    }

    /// Reduce what binds tighter than `op`, then push it
    fn push_operator(&mut self, op: Operator, position: usize) -> Result<(), ParseError> {
        if !op.is_prefix() {
            while let Some(&Marker::Operator(top, top_position)) = self.markers.last() {
                let reduce = top.precedence() > op.precedence()
                    || (top.precedence() == op.precedence()
                        && op.associativity() == Associativity::Left);
                if !reduce {
                    break;
                }
                self.markers.pop();
                self.reduce_operator(top, top_position)?;
            }
        }
        self.markers.push(Marker::Operator(op, position));
        self.infix = false;
        Ok(())
    }

    fn separator(&mut self, position: usize) -> Result<(), ParseError> {
        self.expect_operand(position)?;
        loop {
            match self.markers.last() {
                Some(&Marker::Operator(op, op_position)) => {
                    self.markers.pop();
                    self.reduce_operator(op, op_position)?;
                }
                Some(Marker::Function(..)) => break,
                Some(Marker::Open(_)) | None => {
                    return Err(ParseError::new(
                        position,
                        "',' outside of a function call",
                    ))
                }
            }
        }
        let count = self
            .arg_counts
            .last_mut()
            .ok_or_else(|| ParseError::new(position, "',' outside of a function call"))?;
        *count += 1;
        self.output.push(Slot::Pending);
        self.infix = false;
        Ok(())
    }

    fn open(&mut self, position: usize) -> Result<(), ParseError> {
        if self.infix {
            return Err(ParseError::new(position, "unexpected '(' after an operand"));
        }
        self.markers.push(Marker::Open(position));
        Ok(())
    }

    /// Resolve the innermost `(` or function call
    fn close(&mut self, position: usize) -> Result<(), ParseError> {
        self.expect_operand(position)?;
        loop {
            match self.markers.pop() {
                Some(Marker::Operator(op, op_position)) => self.reduce_operator(op, op_position)?,
                Some(Marker::Open(_)) => {
                    if !self.infix {
                        return Err(ParseError::new(position, "empty parentheses"));
                    }
                    return Ok(());
                }
                Some(Marker::Function(name, fn_position)) => {
                    self.reduce_function(name, fn_position)?;
                    self.infix = true;
                    return Ok(());
                }
                None => return Err(ParseError::new(position, "unbalanced ')'")),
            }
        }
    }

    fn finish(&mut self) -> Result<Expr<M>, ParseError> {
        self.expect_operand(self.end)?;
        while let Some(marker) = self.markers.pop() {
            match marker {
                Marker::Operator(op, position) => self.reduce_operator(op, position)?,
                Marker::Open(position) => {
                    return Err(ParseError::new(position, "unbalanced '('"))
                }
                Marker::Function(name, position) => {
                    return Err(ParseError::new(
                        position,
                        format!("unclosed call to '{}'", name),
                    ))
                }
            }
        }

        match (self.output.pop(), self.output.is_empty()) {
            (Some(Slot::Node(expr, _)), true) => Ok(expr),
            (None, _) => Err(ParseError::new(0, "empty formula")),
            _ => Err(ParseError::new(
                self.end,
                "malformed formula: expected a single expression",
            )),
        }
    }

    /// An operator still waiting for its right operand is a fault
    fn expect_operand(&self, position: usize) -> Result<(), ParseError> {
        match self.markers.last() {
            Some(Marker::Operator(op, _)) if !self.infix => Err(ParseError::new(
                position,
                format!("missing operand after '{}'", op),
            )),
            _ => Ok(()),
        }
    }

    fn reduce_operator(&mut self, op: Operator, position: usize) -> Result<(), ParseError> {
        let arity = op.arity();
        if self.output.len() < arity {
            return Err(ParseError::new(
                position,
                format!("missing operand for '{}'", op),
            ));
        }
        let slots = self.output.split_off(self.output.len() - arity);
        let (operands, depth) = collect_nodes(slots, |_| {
            ParseError::new(position, format!("missing operand for '{}'", op))
        })?;
        self.check_depth(depth, position)?;
        self.emit(Expr::Operator { op, operands }, depth);
        Ok(())
    }

    fn reduce_function(&mut self, name: String, position: usize) -> Result<(), ParseError> {
        let count = self
            .arg_counts
            .pop()
            .ok_or_else(|| ParseError::new(position, "argument count underflow"))?;
        if self.output.len() < count {
            return Err(ParseError::new(
                position,
                format!("malformed argument list for '{}'", name),
            ));
        }
        let slots = self.output.split_off(self.output.len() - count);

        let (args, depth) = if count == 1 && matches!(slots[0], Slot::Pending) {
            (Vec::new(), 1)
        } else {
            collect_nodes(slots, |i| {
                ParseError::new(
                    position,
                    format!("missing argument {} in call to '{}'", i + 1, name),
                )
            })?
        };
        self.check_depth(depth, position)?;

        self.emit(Expr::Function { name, args }, depth);
        Ok(())
    }

    fn check_depth(&self, depth: usize, position: usize) -> Result<(), ParseError> {
        if depth > MAX_NESTING {
            return Err(ParseError::new(
                position,
                format!("formula nests deeper than {} levels", MAX_NESTING),
            ));
        }
        Ok(())
    }

    /// Fill a pending slot or push a new node
    fn emit(&mut self, expr: Expr<M>, depth: usize) {
        match self.output.last_mut() {
            Some(slot @ Slot::Pending) => *slot = Slot::Node(expr, depth),
            _ => self.output.push(Slot::Node(expr, depth)),
        }
    }

    /// Turn an operand token into a literal value
    fn materialize(&mut self, token: &Token) -> Value<M> {
        let ctx = self.ctx;
        match token.kind {
            TokenKind::Number => match ctx.numbers.parse_number(&token.text) {
                Ok(n) => Value::Number(n),
                Err(err) => {
                    self.errors.push(ParseError::new(token.position, err.to_string()));
                    self.fallback(token, LiteralFallback::number_error())
                }
            },
            TokenKind::Range => match ctx.ranges.parse_range(&token.text) {
                Ok(range) => Value::Range(range),
                Err(err) => {
                    self.errors.push(ParseError::new(token.position, err.to_string()));
                    self.fallback(token, LiteralFallback::range_error())
                }
            },
            TokenKind::Logical => Value::Logical(parse_logical(&token.text).unwrap_or(false)),
            TokenKind::Error => {
                Value::Error(CellError::parse(&token.text).unwrap_or(CellError::Name))
            }
            TokenKind::Text => Value::Text(token.text.clone()),
            _ => {
                self.errors.push(ParseError::new(
                    token.position,
                    format!("unrecognized name '{}'", token.text),
                ));
                Value::Error(CellError::Name)
            }
        }
    }

    fn fallback(&self, token: &Token, error: CellError) -> Value<M> {
        let fallback = self.ctx.options.literal_fallback;
        tracing::warn!(
            text = %token.text,
            position = token.position,
            ?fallback,
            "literal rejected by provider"
        );
        match fallback {
            LiteralFallback::Text => Value::Text(token.text.clone()),
            LiteralFallback::Error => Value::Error(error),
        }
    }
}

/// Unwrap finished children, returning them with the height of their parent
fn collect_nodes<M: Model>(
    slots: Vec<Slot<M>>,
    missing: impl Fn(usize) -> ParseError,
) -> Result<(Vec<Expr<M>>, usize), ParseError> {
    let mut nodes = Vec::with_capacity(slots.len());
    let mut height = 0;
    for (i, slot) in slots.into_iter().enumerate() {
        match slot {
            Slot::Node(expr, depth) => {
                height = height.max(depth);
                nodes.push(expr);
            }
            Slot::Pending => return Err(missing(i)),
        }
    }
    Ok((nodes, height + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParseOptions;
    use crate::functions::FunctionRegistry;
    use crate::providers::{DecimalGrid, DecimalNumbers, GridRanges};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tabula_core::RangeSpec;

    type E = Expr<DecimalGrid>;

    struct Fixture {
        grid: GridRanges<DecimalGrid>,
        functions: FunctionRegistry<DecimalGrid>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                grid: GridRanges::new(),
                functions: FunctionRegistry::new(),
            }
        }

        fn ctx(&self) -> Context<'_, DecimalGrid> {
            Context::new(&DecimalNumbers, &self.grid, &self.functions)
        }
    }

    fn parse_ok(source: &str) -> E {
        let fixture = Fixture::new();
        let parsed = parse(source, &fixture.ctx()).unwrap();
        assert_eq!(parsed.errors, vec![], "diagnostics for {}", source);
        parsed.expr
    }

    fn parse_err(source: &str) -> Vec<ParseError> {
        let fixture = Fixture::new();
        match parse(source, &fixture.ctx()) {
            Err(FormulaError::Parse(errors)) => errors,
            other => panic!("expected a parse failure for {}, got {:?}", source, other),
        }
    }

    fn num(text: &str) -> E {
        Expr::Literal(Value::Number(Decimal::from_str(text).unwrap()))
    }

    fn range(text: &str) -> E {
        Expr::Literal(Value::Range(RangeSpec::parse(text).unwrap()))
    }

    fn op(op: Operator, operands: Vec<E>) -> E {
        Expr::Operator { op, operands }
    }

    fn call(name: &str, args: Vec<E>) -> E {
        Expr::Function {
            name: name.to_string(),
            args,
        }
    }

    #[test]
    fn test_parse_function_plus_number() {
        assert_eq!(
            parse_ok("=sum(A:A) + 2.0"),
            op(
                Operator::Addition,
                vec![call("sum", vec![range("A:A")]), num("2.0")]
            )
        );
    }

    #[test]
    fn test_unary_and_binary_minus() {
        assert_eq!(
            parse_ok("=-3+2"),
            op(
                Operator::Addition,
                vec![op(Operator::UnaryNegation, vec![num("3")]), num("2")]
            )
        );
        assert_eq!(
            parse_ok("=3-2"),
            op(Operator::Subtraction, vec![num("3"), num("2")])
        );
        // whitespace does not change the classification
        assert_eq!(parse_ok("=3 - 2"), parse_ok("=3-2"));
        assert_eq!(parse_ok("= - 3 + 2"), parse_ok("=-3+2"));
    }

    #[test]
    fn test_implicit_intersection() {
        assert_eq!(
            parse_ok("=A1 A2"),
            op(Operator::Intersection, vec![range("A1"), range("A2")])
        );
        // binds tighter than arithmetic
        assert_eq!(
            parse_ok("=A:A 1:1 + 1"),
            op(
                Operator::Addition,
                vec![
                    op(Operator::Intersection, vec![range("A:A"), range("1:1")]),
                    num("1")
                ]
            )
        );
    }

    #[test]
    fn test_precedence_and_associativity() {
        assert_eq!(
            parse_ok("=1+2*3"),
            op(
                Operator::Addition,
                vec![
                    num("1"),
                    op(Operator::Multiplication, vec![num("2"), num("3")])
                ]
            )
        );
        assert_eq!(
            parse_ok("=8-4-2"),
            op(
                Operator::Subtraction,
                vec![
                    op(Operator::Subtraction, vec![num("8"), num("4")]),
                    num("2")
                ]
            )
        );
        assert_eq!(
            parse_ok("=2^3^2"),
            op(
                Operator::Exponentiation,
                vec![
                    op(Operator::Exponentiation, vec![num("2"), num("3")]),
                    num("2")
                ]
            )
        );
        // negation binds tighter than exponentiation
        assert_eq!(
            parse_ok("=-2^2"),
            op(
                Operator::Exponentiation,
                vec![op(Operator::UnaryNegation, vec![num("2")]), num("2")]
            )
        );
        assert_eq!(
            parse_ok("=(1+2)*3"),
            op(
                Operator::Multiplication,
                vec![op(Operator::Addition, vec![num("1"), num("2")]), num("3")]
            )
        );
    }

    #[test]
    fn test_percent_and_unary_plus() {
        assert_eq!(
            parse_ok("=50%*2"),
            op(
                Operator::Multiplication,
                vec![op(Operator::Percent, vec![num("50")]), num("2")]
            )
        );
        assert_eq!(parse_ok("=+5"), num("5"));
        assert_eq!(
            parse_ok("=2*-3"),
            op(
                Operator::Multiplication,
                vec![num("2"), op(Operator::UnaryNegation, vec![num("3")])]
            )
        );
    }

    #[test]
    fn test_comparison_and_concatenation() {
        assert_eq!(
            parse_ok("=1&2=\"12\""),
            op(
                Operator::Equality,
                vec![
                    op(Operator::Concatenation, vec![num("1"), num("2")]),
                    Expr::Literal(Value::Text("12".into()))
                ]
            )
        );
    }

    #[test]
    fn test_function_arguments() {
        assert_eq!(parse_ok("=pi()"), call("pi", vec![]));
        assert_eq!(
            parse_ok("=SUM(1, 2+3, A1)"),
            call(
                "sum",
                vec![
                    num("1"),
                    op(Operator::Addition, vec![num("2"), num("3")]),
                    range("A1")
                ]
            )
        );
        assert_eq!(
            parse_ok("=sum(sum(), -1)"),
            call(
                "sum",
                vec![
                    call("sum", vec![]),
                    op(Operator::UnaryNegation, vec![num("1")])
                ]
            )
        );
        assert_eq!(
            parse_ok("=(sum(1))*2"),
            op(
                Operator::Multiplication,
                vec![call("sum", vec![num("1")]), num("2")]
            )
        );
    }

    #[test]
    fn test_nested_calls_with_operators() {
        assert_eq!(
            parse_ok("=max(1, min(2, 3) * 4) - 1"),
            op(
                Operator::Subtraction,
                vec![
                    call(
                        "max",
                        vec![
                            num("1"),
                            op(
                                Operator::Multiplication,
                                vec![call("min", vec![num("2"), num("3")]), num("4")]
                            )
                        ]
                    ),
                    num("1")
                ]
            )
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            parse_ok("=TRUE"),
            Expr::Literal(Value::Logical(true))
        );
        assert_eq!(
            parse_ok("=#N/A"),
            Expr::Literal(Value::Error(CellError::Na))
        );
        assert_eq!(
            parse_ok("plain text"),
            Expr::Literal(Value::Text("plain text".into()))
        );
    }

    #[test]
    fn test_structural_faults() {
        for source in [
            "=",
            "=(1+2",
            "=1+2)",
            "=sum(1,",
            "=sum(1,,2)",
            "=sum(,1)",
            "=1,2",
            "=1+",
            "=*2",
            "=()",
            "=1 2",
            "=2(3)",
            "=sum(1",
            "=1 sum(2)",
            "=%",
            "=sum((1,2)",
        ] {
            let errors = parse_err(source);
            assert!(!errors.is_empty(), "no diagnostics for {}", source);
        }
    }

    #[test]
    fn test_fault_keeps_earlier_diagnostics() {
        let errors = parse_err("=foo + (1");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("foo"));
        assert_eq!(errors[1].position, 7);
    }

    #[test]
    fn test_unknown_name_is_name_error() {
        let fixture = Fixture::new();
        let parsed = parse("=foo + 1", &fixture.ctx()).unwrap();
        assert_eq!(
            parsed.expr,
            op(
                Operator::Addition,
                vec![Expr::Literal(Value::Error(CellError::Name)), num("1")]
            )
        );
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].position, 1);
    }

    #[test]
    fn test_dangling_absolute_marker_is_reported() {
        let fixture = Fixture::new();
        let parsed = parse("=A$", &fixture.ctx()).unwrap();
        assert_eq!(parsed.expr, Expr::Literal(Value::Error(CellError::Name)));
        assert_eq!(parsed.errors.len(), 1);
        assert!(parsed.errors[0].message.contains("'A$'"));
    }

    #[test]
    fn test_literal_fallback_text() {
        let fixture = Fixture::new();
        let parsed = parse("=A0 & 1e99", &fixture.ctx()).unwrap();
        assert_eq!(
            parsed.expr,
            op(
                Operator::Concatenation,
                vec![
                    Expr::Literal(Value::Text("A0".into())),
                    Expr::Literal(Value::Text("1e99".into()))
                ]
            )
        );
        assert_eq!(parsed.errors.len(), 2);
    }

    #[test]
    fn test_literal_fallback_error() {
        let fixture = Fixture::new();
        let ctx = fixture
            .ctx()
            .with_options(ParseOptions::default().with_literal_fallback(LiteralFallback::Error));
        let parsed = parse("=A0 & 1e99", &ctx).unwrap();
        assert_eq!(
            parsed.expr,
            op(
                Operator::Concatenation,
                vec![
                    Expr::Literal(Value::Error(CellError::Ref)),
                    Expr::Literal(Value::Error(CellError::Value))
                ]
            )
        );
        assert_eq!(parsed.errors.len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let source = "=sum(A1:B3 B:B, -2%, \"x\"&TRUE) ^ 2 <> max(1:1)";
        let first = parse_ok(source);
        for _ in 0..5 {
            assert_eq!(parse_ok(source), first);
        }
        assert_eq!(first.node_count(), 15);
    }

    #[test]
    fn test_nesting_limit() {
        let deepest = parse_ok(&format!("={}1", "-".repeat(MAX_NESTING - 1)));
        assert_eq!(deepest.node_count(), MAX_NESTING);

        for source in [
            format!("={}1", "-".repeat(MAX_NESTING)),
            format!("={}1", "-".repeat(10_000)),
            format!("={}1{}", "sum(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1)),
        ] {
            let errors = parse_err(&source);
            let last = errors.last().unwrap();
            assert!(last.message.contains("nests deeper"), "{}", last.message);
            assert!(last.position < source.len());
        }

        // parentheses alone add no depth
        let wrapped = format!("={}1{}", "(".repeat(1000), ")".repeat(1000));
        assert_eq!(parse_ok(&wrapped), num("1"));
    }

    #[test]
    fn test_parse_reader() {
        let fixture = Fixture::new();
        let parsed = parse_reader("=1+A1".as_bytes(), &fixture.ctx()).unwrap();
        assert_eq!(
            parsed.expr,
            op(Operator::Addition, vec![num("1"), range("A1")])
        );
    }
}
