//! Rate methods for [`TonApiClient`].

use super::{Query, TonApiClient};
use crate::error::Result;
use crate::models::{ChartRates, Rates};

impl TonApiClient {
    /// Get prices for the given tokens in the given currencies.
    ///
    /// Tokens are addresses of jetton masters, or `ton` for the native coin.
    pub async fn get_prices<S: AsRef<str>>(&self, tokens: &[S], currencies: &[S]) -> Result<Rates> {
        let query = Query::new()
            .list("tokens", tokens)
            .list("currencies", currencies);
        self.get_json("v2/rates", &query).await
    }

    /// Get the historical price chart of a token.
    pub async fn get_chart_rates(
        &self,
        token: &str,
        currency: &str,
        start_date: Option<i64>,
        end_date: Option<i64>,
    ) -> Result<ChartRates> {
        let query = Query::new()
            .pair("token", token)
            .pair("currency", currency)
            .opt("start_date", start_date)
            .opt("end_date", end_date);
        self.get_json("v2/rates/chart", &query).await
    }
}
