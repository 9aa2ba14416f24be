//! Number scanner
//!
//! Recognizes signed integers, `0x`/`$` hexadecimal, `0b` binary, decimal
//! fractions and scientific notation. The scanner remembers the last
//! position where the text read so far formed a complete number; when it
//! stops in the middle of a construct (`1e`, `0x`, `-.`) it gives back the
//! overrun and emits that longest complete number, or rejects if there was
//! none.

use lexkit_config::NumberConfig;
use tracing::trace;

use crate::lexer::core::EOF_CHAR;
use crate::lexer::scanner::Scanner;
use crate::lexer::token::TokenCode;
use crate::lexer::tokenizer::Tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    PlusMinus,
    Zero,
    Number,
    LeadingPeriod,
    Period,
    Float,
    SciFloat,
    SciFloatExpSign,
    SciFloatExp,
    HexIntegerStart,
    HexInteger,
    BinaryIntegerStart,
    BinaryInteger,
}

impl NumberState {
    /// Code of the number read so far, if it is complete
    fn code(self) -> Option<TokenCode> {
        match self {
            NumberState::Zero | NumberState::Number => Some(TokenCode::Integer),
            NumberState::Float | NumberState::SciFloatExp => Some(TokenCode::Float),
            NumberState::HexInteger => Some(TokenCode::HexNumber),
            NumberState::BinaryInteger => Some(TokenCode::BinaryNumber),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NumberScanner {
    config: NumberConfig,
}

impl NumberScanner {
    pub fn new(config: NumberConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NumberConfig {
        &self.config
    }

    fn step(&self, state: NumberState, c: char) -> Option<NumberState> {
        use NumberState::*;

        let cfg = &self.config;
        let exponent = cfg.scientific && (c == 'e' || c == 'E');
        let period = cfg.fractions && c == '.';
        match state {
            Start => match c {
                '+' | '-' if cfg.sign => Some(PlusMinus),
                '$' if cfg.dollar_hex => Some(HexIntegerStart),
                _ => self.step(PlusMinus, c),
            },
            PlusMinus => match c {
                '0' => Some(Zero),
                '1'..='9' => Some(Number),
                _ if period => Some(LeadingPeriod),
                _ => None,
            },
            Zero => match c {
                'x' | 'X' if cfg.hex => Some(HexIntegerStart),
                'b' | 'B' => Some(BinaryIntegerStart),
                _ => self.step(Number, c),
            },
            Number => match c {
                '0'..='9' => Some(Number),
                _ if period => Some(Period),
                _ if exponent => Some(SciFloat),
                _ => None,
            },
            LeadingPeriod | Period => c.is_ascii_digit().then_some(Float),
            Float => match c {
                '0'..='9' => Some(Float),
                _ if exponent => Some(SciFloat),
                _ => None,
            },
            SciFloat => match c {
                '+' | '-' => Some(SciFloatExpSign),
                '0'..='9' => Some(SciFloatExp),
                _ => None,
            },
            SciFloatExpSign | SciFloatExp => c.is_ascii_digit().then_some(SciFloatExp),
            HexIntegerStart | HexInteger => c.is_ascii_hexdigit().then_some(HexInteger),
            BinaryIntegerStart | BinaryInteger => matches!(c, '0' | '1').then_some(BinaryInteger),
        }
    }
}

impl Scanner for NumberScanner {
    fn name(&self) -> &str {
        "number"
    }

    fn scan(&mut self, tokenizer: &mut Tokenizer<'_>) {
        let mut state = NumberState::Start;
        let mut consumed = 0usize;
        let mut complete: Option<(usize, TokenCode)> = None;
        loop {
            let c = tokenizer.peek();
            if c == EOF_CHAR {
                break;
            }
            let Some(next) = self.step(state, c) else {
                break;
            };
            tokenizer.push();
            consumed += 1;
            state = next;
            if let Some(code) = state.code() {
                complete = Some((consumed, code));
            }
        }
        match complete {
            Some((length, code)) => {
                if length < consumed {
                    trace!(
                        target: "lexkit::scanner",
                        overrun = consumed - length,
                        ?state,
                        "Number backed off"
                    );
                    tokenizer.partial_rewind(consumed - length);
                }
                tokenizer.accept(code);
            }
            None => {
                trace!(target: "lexkit::scanner", ?state, "Not a number");
            }
        }
    }
}
