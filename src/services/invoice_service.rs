use std::{fmt, str::FromStr};

use chrono::{Duration, Utc};
use sea_orm::{Set, prelude::DateTimeWithTimeZone};
use serde::{Deserialize, Serialize};

use crate::{
    db::{
        dao::{BillLineRow, DaoBase, InvoiceDao, OrderDao},
        entities::invoice,
    },
    error::AppError,
    services::billing_service::BillingService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Card,
    Cash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "CARD",
            PaymentMethod::Cash => "CASH",
        }
    }
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Paid => "PAID",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CARD" => Ok(PaymentMethod::Card),
            "CASH" => Ok(PaymentMethod::Cash),
            _ => Err(AppError::bad_request("payment_method must be CARD or CASH")),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(PaymentStatus::Pending),
            "PAID" => Ok(PaymentStatus::Paid),
            _ => Err(AppError::bad_request("payment_status must be PENDING or PAID")),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvoicePatch {
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: Option<PaymentStatus>,
}

/// An invoice with the amounts of its order's bill folded in.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceView {
    pub invoice_id: String,
    pub payment_method: Option<String>,
    pub order_id: String,
    pub payment_status: String,
    pub payment_due: f64,
    pub table_number: Option<i32>,
    pub payment_due_date: DateTimeWithTimeZone,
    pub order_details: Vec<BillLineRow>,
}

#[derive(Clone)]
pub struct InvoiceService {
    invoice_dao: InvoiceDao,
    order_dao: OrderDao,
    billing: BillingService,
}

impl InvoiceService {
    pub fn new(invoice_dao: InvoiceDao, order_dao: OrderDao, billing: BillingService) -> Self {
        Self {
            invoice_dao,
            order_dao,
            billing,
        }
    }

    pub async fn list(&self) -> Result<Vec<invoice::Model>, AppError> {
        Ok(self.invoice_dao.list_all().await?)
    }

    pub async fn get(&self, invoice_id: &str) -> Result<invoice::Model, AppError> {
        Ok(self.invoice_dao.find_by_key(invoice_id).await?)
    }

    pub async fn view(&self, invoice_id: &str) -> Result<InvoiceView, AppError> {
        let invoice = self.get(invoice_id).await?;
        let bill = self.billing.compute_bill(&invoice.order_id).await?;

        Ok(InvoiceView {
            invoice_id: invoice.invoice_id,
            payment_method: invoice.payment_method,
            order_id: invoice.order_id,
            payment_status: invoice.payment_status,
            payment_due: bill.payment_due,
            table_number: bill.table_number,
            payment_due_date: invoice.payment_due_date,
            order_details: bill.order_items,
        })
    }

    /// Due one day after issue; status starts out PENDING unless given.
    pub async fn create(
        &self,
        order_id: &str,
        payment_method: Option<PaymentMethod>,
        payment_status: Option<PaymentStatus>,
    ) -> Result<invoice::Model, AppError> {
        if !self.order_dao.exists(order_id).await? {
            return Err(AppError::not_found("order was not found"));
        }

        let status = payment_status.unwrap_or(PaymentStatus::Pending);
        let model = invoice::ActiveModel {
            order_id: Set(order_id.to_string()),
            payment_method: Set(payment_method.map(|method| method.as_str().to_string())),
            payment_status: Set(status.to_string()),
            payment_due_date: Set(Utc::now().fixed_offset() + Duration::days(1)),
            ..Default::default()
        };
        Ok(self.invoice_dao.create(model).await?)
    }

    pub async fn update(
        &self,
        invoice_id: &str,
        patch: InvoicePatch,
    ) -> Result<invoice::Model, AppError> {
        let updated = self
            .invoice_dao
            .update_by_key(invoice_id, move |active| {
                if let Some(method) = patch.payment_method {
                    active.payment_method = Set(Some(method.as_str().to_string()));
                }
                if let Some(status) = patch.payment_status {
                    active.payment_status = Set(status.to_string());
                }
            })
            .await?;
        Ok(updated)
    }
}
