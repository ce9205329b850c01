//! Ternary Calculator - CLI Entry Point
//!
//! Commands:
//! - `ternary-calc convert <value>` - Show a value as 64 trits and in decimal
//! - `ternary-calc eval <lhs> <op> <rhs>` - Evaluate one operation natively
//! - `ternary-calc self-test` - Run the built-in checks
//!
//! Operands are decimal unless prefixed with `0t` (or made only of trit
//! symbols that do not read as a decimal, such as `+-0`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use serde::Serialize;
use ternaryint::{TernaryInt, Trit, TritOps};

#[derive(Parser)]
#[command(name = "ternary-calc")]
#[command(version = "0.1.0")]
#[command(about = "Balanced ternary arithmetic on 64-trit integers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a value as a 64-trit string and as a decimal
    Convert {
        /// Decimal value or `0t`-prefixed trit string
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Evaluate `<lhs> <op> <rhs>`
    Eval {
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// One of + - * / % << >> cmp divmod min max
        op: Op,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        rhs: String,
        /// Emit JSON instead of text
        #[arg(short, long)]
        json: bool,
    },
    /// Run the built-in self-test
    SelfTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    DivMod,
    Shl,
    Shr,
    Cmp,
    Min,
    Max,
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "add" => Ok(Op::Add),
            "-" | "sub" => Ok(Op::Sub),
            "*" | "x" | "mul" => Ok(Op::Mul),
            "/" | "div" => Ok(Op::Div),
            "%" | "rem" => Ok(Op::Rem),
            "divmod" => Ok(Op::DivMod),
            "<<" | "shl" => Ok(Op::Shl),
            ">>" | "shr" => Ok(Op::Shr),
            "cmp" => Ok(Op::Cmp),
            "min" => Ok(Op::Min),
            "max" => Ok(Op::Max),
            other => Err(format!("unknown operator '{}'", other)),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
            Op::DivMod => "divmod",
            Op::Shl => "<<",
            Op::Shr => ">>",
            Op::Cmp => "cmp",
            Op::Min => "min",
            Op::Max => "max",
        };
        write!(f, "{}", symbol)
    }
}

/// A value as printed in reports.
#[derive(Serialize)]
struct Rendered {
    name: &'static str,
    trits: String,
    decimal: String,
    planes: TernaryInt,
}

impl Rendered {
    fn new(name: &'static str, value: TernaryInt) -> Self {
        Self {
            name,
            trits: value.to_string(),
            decimal: value.to_i128().to_string(),
            planes: value,
        }
    }
}

#[derive(Serialize)]
struct Evaluation {
    op: String,
    lhs: Rendered,
    rhs: Rendered,
    results: Vec<Rendered>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ordering: Option<&'static str>,
    overflow: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert { value }) => {
            convert_value(&value);
        }
        Some(Commands::Eval { lhs, op, rhs, json }) => {
            eval_expression(&lhs, op, &rhs, json);
        }
        Some(Commands::SelfTest) => {
            run_self_test();
        }
        None => {
            println!("Ternary Calculator v0.1.0");
            println!("64-trit balanced ternary arithmetic");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_ternary_arithmetic();
        }
    }
}

fn parse_operand(text: &str) -> Result<TernaryInt, String> {
    let text = text.trim();
    if !text.starts_with("0t") {
        if let Ok(decimal) = text.parse::<i128>() {
            return Ok(TernaryInt::from_i128(decimal));
        }
    }
    TernaryInt::parse(text).map_err(|e| format!("cannot read '{}': {}", text, e))
}

fn operand_or_exit(text: &str) -> TernaryInt {
    match parse_operand(text) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn convert_value(text: &str) {
    let value = operand_or_exit(text);
    println!("trits:   {}", value);
    println!("decimal: {}", value.to_i128());
    println!("minus:   {:#018x}", value.minus());
    println!("plus:    {:#018x}", value.plus());
    match i64::try_from(value) {
        Ok(v) => println!("i64:     {}", v),
        Err(e) => println!("i64:     {} (wraps to {})", e, value.to_i64()),
    }
}

fn shift_count(value: &TernaryInt) -> Result<u32, String> {
    u32::try_from(value.to_i128()).map_err(|_| format!("invalid shift count {}", value.to_i128()))
}

fn evaluate(lhs: TernaryInt, op: Op, rhs: TernaryInt) -> Result<Evaluation, String> {
    let mut overflow = false;
    let mut ordering = None;

    let results = match op {
        Op::Add => {
            let (sum, lost) = lhs.overflowing_add(&rhs);
            overflow = lost;
            vec![Rendered::new("sum", sum)]
        }
        Op::Sub => {
            let (difference, lost) = lhs.overflowing_sub(&rhs);
            overflow = lost;
            vec![Rendered::new("difference", difference)]
        }
        Op::Mul => vec![Rendered::new("product", lhs * rhs)],
        Op::Div | Op::Rem | Op::DivMod => {
            let (quotient, remainder) = lhs.divmod(&rhs).map_err(|e| e.to_string())?;
            match op {
                Op::Div => vec![Rendered::new("quotient", quotient)],
                Op::Rem => vec![Rendered::new("remainder", remainder)],
                _ => vec![
                    Rendered::new("quotient", quotient),
                    Rendered::new("remainder", remainder),
                ],
            }
        }
        Op::Shl => vec![Rendered::new("shifted", lhs << shift_count(&rhs)?)],
        Op::Shr => vec![Rendered::new("shifted", lhs >> shift_count(&rhs)?)],
        Op::Cmp => {
            ordering = Some(match lhs.compare(&rhs) {
                Ordering::Less => "less",
                Ordering::Equal => "equal",
                Ordering::Greater => "greater",
            });
            Vec::new()
        }
        Op::Min => vec![Rendered::new("min", lhs.ternary_min(&rhs))],
        Op::Max => vec![Rendered::new("max", lhs.ternary_max(&rhs))],
    };

    Ok(Evaluation {
        op: op.to_string(),
        lhs: Rendered::new("lhs", lhs),
        rhs: Rendered::new("rhs", rhs),
        results,
        ordering,
        overflow,
    })
}

fn eval_expression(lhs: &str, op: Op, rhs: &str, json: bool) {
    let lhs = operand_or_exit(lhs);
    let rhs = operand_or_exit(rhs);

    let evaluation = match evaluate(lhs, op, rhs) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&evaluation) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ Failed to encode JSON: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{:>10} = {} {}", "A", evaluation.lhs.trits, evaluation.lhs.decimal);
    println!("{:>10} = {} {}", "B", evaluation.rhs.trits, evaluation.rhs.decimal);
    for result in &evaluation.results {
        println!("{:>10} = {} {}", result.name, result.trits, result.decimal);
    }
    if let Some(ordering) = evaluation.ordering {
        println!("A {} B: {}", op, ordering);
    }
    if evaluation.overflow {
        println!();
        println!("⚠️  Result exceeded 64 trits and was truncated.");
    }
}

fn demo_ternary_arithmetic() {
    println!("━━━ Balanced Ternary Demo ━━━");
    println!();

    println!("Trits (single balanced ternary digits):");
    for t in Trit::ALL {
        println!("  {:?} = {} ({})", t, t, t.to_i8());
    }
    println!();

    let show = |label: &str, value: TernaryInt| {
        println!("{:>5} = {} {}", label, value, value.to_i64());
    };

    let a = TernaryInt::from(57_934_588_798_797i64);
    let b = TernaryInt::from(-32_432_408_797_923i64);
    show("A", a);
    show("B", b);
    show("A+B", a + b);
    show("A-B", a - b);
    show("-B", -b);
    println!();

    let a = TernaryInt::from(12_345_679i64);
    let b = TernaryInt::from(-8i64);
    show("A", a);
    show("B", b);
    show("A*B", a * b);
    println!();

    for (x, y) in [(1003i64, 5i64), (-1003, 5), (-1003, -5), (1003, -5)] {
        let a = TernaryInt::from(x);
        let b = TernaryInt::from(y);
        if let Ok((q, r)) = a.divmod(&b) {
            println!("{:>6} / {:>3} = {} rem {}", x, y, q.to_i64(), r.to_i64());
        }
    }
    println!();

    let mut a = TernaryInt::from(-11i64);
    let mut b = TernaryInt::from(-12i64);
    println!("-11 >= -12: {}", a >= b);
    a <<= 3u32;
    show("A<<3", a);
    b >>= 2u32;
    show("B>>2", b);
}

fn run_self_test() {
    println!("━━━ Ternary Arithmetic Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    let mut check = |name: &str, ok: bool| {
        if ok {
            println!("{}... ✓", name);
            passed += 1;
        } else {
            println!("{}... ✗", name);
            failed += 1;
        }
    };

    check(
        "Decimal round trip",
        [i64::MIN, -9841, -1, 0, 1, 9841, i64::MAX]
            .iter()
            .all(|&v| TernaryInt::from(v).to_i64() == v),
    );

    let a = TernaryInt::from(57_934_588_798_797i64);
    let b = TernaryInt::from(-32_432_408_797_923i64);
    check("Addition", (a + b).to_i64() == 57_934_588_798_797 - 32_432_408_797_923);
    check("Subtraction via negation", a + (-b) == a - b);
    check("Negation swaps planes", (-a).minus() == a.plus() && (-a).plus() == a.minus());

    check(
        "Multiplication",
        (TernaryInt::from(12_345_679i64) * TernaryInt::from(-8i64)).to_i64() == -98_765_432,
    );

    let division = |x: i64, y: i64| {
        TernaryInt::from(x)
            .divmod(&TernaryInt::from(y))
            .map(|(q, r)| (q.to_i64(), r.to_i64()))
    };
    check("Truncating division (1003 / 5)", division(1003, 5) == Ok((200, 3)));
    check("Truncating division (-1003 / 5)", division(-1003, 5) == Ok((-200, -3)));
    check(
        "Division by zero rejected",
        TernaryInt::ONE.divmod(&TernaryInt::ZERO).is_err(),
    );

    check(
        "Comparison",
        TernaryInt::from(-11i64) > TernaryInt::from(-12i64),
    );
    check(
        "Shift left (×27)",
        (TernaryInt::from(-11i64) << 3u32).to_i64() == -297,
    );

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("-1003").unwrap().to_i64(), -1003);
        assert_eq!(parse_operand("0t+0-").unwrap().to_i64(), 8);
        assert_eq!(parse_operand("+-").unwrap().to_i64(), 2);
        assert!(parse_operand("12a").is_err());
    }

    #[test]
    fn test_op_from_str() {
        assert_eq!("<<".parse::<Op>(), Ok(Op::Shl));
        assert_eq!("divmod".parse::<Op>(), Ok(Op::DivMod));
        assert!("^".parse::<Op>().is_err());
    }

    #[test]
    fn test_evaluate_divmod() {
        let evaluation = evaluate(TernaryInt::from(-1003i64), Op::DivMod, TernaryInt::from(5i64)).unwrap();
        assert_eq!(evaluation.results[0].decimal, "-200");
        assert_eq!(evaluation.results[1].decimal, "-3");

        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["results"][0]["name"], "quotient");
        assert!(json.get("ordering").is_none());
    }

    #[test]
    fn test_evaluate_errors() {
        assert!(evaluate(TernaryInt::ONE, Op::Div, TernaryInt::ZERO).is_err());
        assert!(evaluate(TernaryInt::ONE, Op::Shl, TernaryInt::from(-1i64)).is_err());
    }

    #[test]
    fn test_evaluate_overflow_flag() {
        let evaluation = evaluate(TernaryInt::MAX, Op::Add, TernaryInt::ONE).unwrap();
        assert!(evaluation.overflow);
        let evaluation = evaluate(TernaryInt::from(-11i64), Op::Cmp, TernaryInt::from(-12i64)).unwrap();
        assert_eq!(evaluation.ordering, Some("greater"));
    }
}
