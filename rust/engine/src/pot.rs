use crate::player::Seat;

/// Chips committed by antes and bets and not yet paid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pot {
    amount: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn add(&mut self, chips: u32) {
        self.amount += chips;
    }

    /// Drains the whole pot.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.amount)
    }

    /// Drains the pot into two halves for a tie.
    ///
    /// An odd chip goes to `odd_chip_to`, so the two shares always sum to the
    /// drained amount.
    pub fn split(&mut self, odd_chip_to: Seat) -> [u32; 2] {
        let total = self.take();
        let half = total / 2;
        let mut shares = [half, half];
        shares[odd_chip_to.index()] += total % 2;
        shares
    }
}
