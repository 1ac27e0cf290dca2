use crate::api::{Optional, Positional, Value};
use crate::matcher::model::*;
use crate::model::{Arity, Kind};
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Phase 1: scan the tokens left to right, binding every option occurrence and its values.
///
/// A token is tested against the options in registration order; the first option with a matching directive wins.
/// Tokens which match no option (and weren't consumed as an option's values) are passed on as the remaining tokens.
///
/// On error, the bindings collected up to the failure are returned alongside the error.
pub(crate) fn scan_options(
    tokens: &[String],
    options: &[&Optional],
) -> Result<Scan, (ParseError, Bindings)> {
    let mut bindings = Bindings::default();

    match scan_into(tokens, options, &mut bindings) {
        Ok(remaining) => Ok(Scan {
            bindings,
            remaining,
        }),
        Err(error) => Err((error, bindings)),
    }
}

fn scan_into(
    tokens: &[String],
    options: &[&Optional],
    bindings: &mut Bindings,
) -> Result<Vec<OffsetValue>, ParseError> {
    let mut remaining = Vec::default();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let token = &tokens[cursor];

        let option = match options.iter().find(|option| option.matches(token)) {
            Some(option) => option,
            None => {
                remaining.push((cursor, token.clone()));
                cursor += 1;
                continue;
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{token}' at {cursor} matches the option '{}'.", option.name);
        }

        // Step over the directive.
        cursor += 1;
        let values = match option.arity {
            Arity::Exactly(0) => vec![Value::truth()],
            Arity::Exactly(n) => {
                let n = n as usize;
                let available = tokens.len() - cursor;

                if available < n {
                    return Err(ParseError::InsufficientArguments {
                        name: option.name.clone(),
                        expected: n,
                        provided: available,
                        position: tokens.len(),
                    });
                }

                let values = convert_all(option.kind, &tokens[cursor..cursor + n], cursor)?;
                cursor += n;
                values
            }
            Arity::Variable => {
                // Consume up to (not including) the next recognized directive.
                let end = tokens[cursor..]
                    .iter()
                    .position(|t| options.iter().any(|o| o.matches(t)))
                    .map(|offset| cursor + offset)
                    .unwrap_or(tokens.len());

                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Variable option '{}' consumes {} token(s).",
                        option.name,
                        end - cursor
                    );
                }

                let values = convert_all(option.kind, &tokens[cursor..end], cursor)?;
                cursor = end;
                values
            }
        };

        bindings.bind(&option.name, values);
    }

    Ok(remaining)
}

/// Phase 2: bind the remaining tokens to the arguments, in registration order.
///
/// A fixed-arity argument takes precisely its arity; the variable-arity argument (necessarily the last) takes everything left, but at least one.
/// Any token left over after all the arguments are bound is an error.
///
/// `end` is the total token count, reported as the error position when the input runs out.
pub(crate) fn bind_positionals(
    remaining: &[OffsetValue],
    arguments: &[&Positional],
    end: usize,
) -> Result<Bindings, ParseError> {
    let mut bindings = Bindings::default();
    let mut cursor = 0;

    for argument in arguments {
        let available = remaining.len() - cursor;
        let take = match argument.arity {
            Arity::Exactly(n) => n as usize,
            Arity::Variable => std::cmp::max(available, 1),
        };

        if available < take {
            return Err(ParseError::InsufficientArguments {
                name: argument.name.clone(),
                expected: take,
                provided: available,
                position: end,
            });
        }

        let values = remaining[cursor..cursor + take]
            .iter()
            .map(|offset_value| convert(offset_value, argument.kind))
            .collect::<Result<Vec<Value>, ParseError>>()?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Argument '{}' binds {take} token(s).", argument.name);
        }

        cursor += take;
        bindings.bind(&argument.name, values);
    }

    match remaining.get(cursor) {
        Some((position, token)) => Err(ParseError::TooManyArguments {
            token: token.clone(),
            position: *position,
        }),
        None => Ok(bindings),
    }
}

fn convert((position, raw): &OffsetValue, kind: Kind) -> Result<Value, ParseError> {
    Value::new(kind, raw.as_str()).map_err(|source| ParseError::Conversion {
        position: *position,
        source,
    })
}

fn convert_all(kind: Kind, raws: &[String], start: usize) -> Result<Vec<Value>, ParseError> {
    raws.iter()
        .enumerate()
        .map(|(i, raw)| convert(&(start + i, raw.clone()), kind))
        .collect()
}
