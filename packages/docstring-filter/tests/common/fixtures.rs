//! Test fixture generators

use docstring_filter::{FunctionRecord, Span};

/// Python class mixing every admissibility and cleaning outcome:
/// `__init__` (dunder), `compute_total` (kept), `size` (trivial body),
/// `apply_discount` (TODO docstring)
pub const PYTHON_BASKET: &str = r#"class Basket:
    def __init__(self, items):
        """Create a basket holding the given items."""
        self.items = items
        self.discount = 0

    def compute_total(self):
        """Sum the price of every item in the basket.

        Discounts are applied after the sum.
        """
        total = 0
        for item in self.items:
            total += item.price
        return total - self.discount

    def size(self):
        """Number of items currently in the basket."""
        return len(self.items)

    def apply_discount(self, amount):
        """TODO: validate the amount"""
        if amount < 0:
            raise ValueError(amount)
        self.discount = amount
        return self.discount
"#;

/// Java class: `balance` (kept), `setOwner` (accessor), `flush` (question)
pub const JAVA_ACCOUNT: &str = r#"public class Account {
    /**
     * Returns the balance in cents, including pending deposits.
     */
    public long balance() {
        long total = settled;
        total += pending;
        return total;
    }

    /** Sets the owner. */
    public void setOwner(String owner) {
        this.owner = owner;
    }

    // Why is this synchronized?
    public synchronized void flush() {
        writer.flush();
        writer.close();
        closed = true;
        log.info("flushed");
    }
}
"#;

/// Python source with a syntax error
pub const PYTHON_BROKEN: &str = "def broken(x):\n    \"\"\"Compute the value.\"\"\"\n    return x $ 2\n";

/// Java source with a syntax error
pub const JAVA_BROKEN: &str = "class A { void f() { int x = 1 # 2; } }\n";

/// A function record spanning `lines` lines
pub fn fixture_record(identifier: &str, lines: u32, docstring: &str) -> FunctionRecord {
    FunctionRecord::new(identifier, Span::lines(1, lines), docstring)
}

/// `n` space-separated copies of "word"
pub fn fixture_words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

/// A batch of `n` admissible records with good docstrings
pub fn fixture_batch(n: usize) -> Vec<FunctionRecord> {
    (0..n)
        .map(|i| {
            fixture_record(
                &format!("handler{i}"),
                12,
                "/**\n * Dispatches the request to the matching route.\n * Falls back to the default handler.\n */",
            )
        })
        .collect()
}
