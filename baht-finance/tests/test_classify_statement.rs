use baht_core::{BankFormat, Polarity, Transaction};
use baht_finance::{StatementSummary, classify_statement};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal_macros::dec;

const KASIKORN_STATEMENT: &str = "ธนาคารกสิกรไทย KASIKORNBANK
STATEMENT OF DEPOSIT
ชื่อบัญชี นางสาว มาลี ศรีสุข
เลขที่บัญชี 123-4-56789-0
สาขา สยามพารากอน
ที่อยู่ 88 ซอยสุขุมวิท 21 แขวงคลองเตยเหนือ กรุงเทพฯ 10110
รอบระหว่างวันที่ 01/07/2025 - 31/07/2025
ยอดยกมา 1,271.41
วันที่ เวลา ช่องทาง ยอดคงเหลือ (บาท) รายการ ถอนเงิน / ฝากเงิน (บาท) รายละเอียด
01-07-25 08:53 K PLUS 1,255.41 ชำระเงิน 16.00 to LINE MAN
01-07-25 12:30 K PLUS 6,255.41 รับโอนเงิน 5,000.00 จาก นาย ก
\x0c
02-07-25 18:02 EDC/K SHOP/MY PROMPTPAY 6,155.41 ชำระค่าสินค้า 100.00 7-ELEVEN
03-07-25 09:15 Internet/Mobile 6,155.91 ดอกเบี้ย 0.50
";

const KRUNGTHAI_STATEMENT: &str = "ธนาคารกรุงไทย Krungthai Bank
รายการเดินบัญชี
ชื่อบัญชี นาย สมชาย ใจดี
เลขที่บัญชี 987-6-54321-0
สาขา สีลม
ที่อยู่ 1 ถนนสีลม บางรัก กรุงเทพฯ 10500
รอบระหว่างวันที่ 01/07/68 - 31/07/68 ยอดยกมา 500.00
วันที่ เวลา รายการ จำนวนเงิน ยอดคงเหลือ
01/07/68 08:30 ฝากเงินสด 500.00 1,000.00
02/07/68 12:10 รับโอนเงิน PromptPay 500.00 1,500.00
03/07/68 18:45 ถอนเงิน ATM 200.00 1,300.00
\x0c
04/07/68 09:00 ชำระค่าไฟฟ้า 300.00
05/07/68 10:00 โอนเงิน 100.00 1,200.00
";

fn polarities(txns: &[Transaction]) -> Vec<Polarity> {
    txns.iter().map(|t| t.polarity).collect()
}

#[test]
fn test_kasikorn_statement() {
    let result = classify_statement(KASIKORN_STATEMENT).unwrap();

    assert_eq!(result.header.bank, BankFormat::Kasikorn);
    assert_eq!(result.header.owner_name.as_deref(), Some("นางสาว มาลี ศรีสุข"));
    assert_eq!(result.header.account_number.as_deref(), Some("123-4-56789-0"));
    assert_eq!(result.header.branch.as_deref(), Some("สยามพารากอน"));
    assert_eq!(
        result.header.address.as_deref(),
        Some("88 ซอยสุขุมวิท 21 แขวงคลองเตยเหนือ กรุงเทพฯ 10110")
    );

    let txns = &result.transactions;
    assert_eq!(txns.len(), 4);
    assert_eq!(
        txns.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(
        polarities(txns),
        vec![
            Polarity::Expense,
            Polarity::Income,
            Polarity::Expense,
            Polarity::Income
        ]
    );
    assert_eq!(
        txns.iter().map(|t| t.amount).collect::<Vec<_>>(),
        vec![dec!(16.00), dec!(5000.00), dec!(100.00), dec!(0.50)]
    );
    assert_eq!(txns[0].description, "ชำระเงิน to LINE MAN");
    assert_eq!(txns[2].description, "ชำระค่าสินค้า 7-ELEVEN");
    assert_eq!(txns[2].date, NaiveDate::from_ymd_opt(2025, 7, 2).unwrap());
    assert_eq!(txns[2].time, Some(NaiveTime::from_hms_opt(18, 2, 0).unwrap()));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_krungthai_statement() {
    let result = classify_statement(KRUNGTHAI_STATEMENT).unwrap();

    assert_eq!(result.header.bank, BankFormat::Krungthai);
    assert_eq!(result.header.owner_name.as_deref(), Some("นาย สมชาย ใจดี"));
    assert_eq!(result.header.account_number.as_deref(), Some("987-6-54321-0"));
    assert_eq!(result.header.branch.as_deref(), Some("สีลม"));
    assert_eq!(
        result.header.address.as_deref(),
        Some("1 ถนนสีลม บางรัก กรุงเทพฯ 10500")
    );

    // period dates and the brought-forward line are not transactions
    let txns = &result.transactions;
    assert_eq!(txns.len(), 5);
    assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    assert_eq!(txns[0].time, Some(NaiveTime::from_hms_opt(8, 30, 0).unwrap()));
    assert_eq!(txns[0].description, "ฝากเงินสด");
    assert_eq!(
        polarities(txns),
        vec![
            Polarity::Income,  // deposit keyword, no predecessor
            Polarity::Income,  // 1,000.00 + 500.00 = 1,500.00
            Polarity::Expense, // 1,500.00 - 200.00 = 1,300.00
            Polarity::Expense, // no balance printed, no keyword
            Polarity::Expense, // predecessor has no balance, no keyword
        ]
    );
    assert_eq!(txns[3].amount, dec!(300.00));

    let summary = StatementSummary::from_transactions(txns);
    assert_eq!(summary.total_income, dec!(1000.00));
    assert_eq!(summary.total_expense, dec!(600.00));
}

#[test]
fn test_krungthai_printed_balance_at_tolerance_edge() {
    // printed balances carry two decimals, so 0.04 is the widest mismatch
    // still accepted and 0.05 the narrowest rejected
    let text = "Krungthai 01/07/68 ฝาก 1,000.00 1,000.00 02/07/68 โอนออก 500.00 1,500.05";
    let result = classify_statement(text).unwrap();
    assert_eq!(result.transactions[1].polarity, Polarity::Expense);

    let text = "Krungthai 01/07/68 ฝาก 1,000.00 1,000.00 02/07/68 โอนออก 500.00 1,500.04";
    let result = classify_statement(text).unwrap();
    assert_eq!(result.transactions[1].polarity, Polarity::Income);
}

#[test]
fn test_krungthai_rows_naming_kasikorn() {
    let text = "รายการเดินบัญชี
ชื่อบัญชี นาย สมชาย ใจดี
01/07/68 08:30 ฝากเงินสด 1,000.00 1,000.00
02/07/68 12:10 รับโอนจาก ธนาคารกสิกรไทย 500.00 1,500.00
03/07/68 18:45 โอนไป KASIKORNBANK 200.00 1,300.00
";
    let result = classify_statement(text).unwrap();

    assert_eq!(result.header.bank, BankFormat::Krungthai);
    assert_eq!(result.transactions.len(), 3);
    assert_eq!(
        polarities(&result.transactions),
        vec![Polarity::Income, Polarity::Income, Polarity::Expense]
    );
    assert_eq!(result.transactions[1].description, "รับโอนจาก ธนาคารกสิกรไทย");
    assert_eq!(result.transactions[2].amount, dec!(200.00));
}

#[test]
fn test_empty_statement_keeps_raw_text() {
    let result = classify_statement("KASIKORNBANK\nno rows on this page\n").unwrap();

    assert!(result.is_empty());
    assert_eq!(result.header.bank, BankFormat::Kasikorn);
    assert_eq!(result.raw_text, "KASIKORNBANK no rows on this page");
}

#[test]
fn test_result_json_shape() {
    let result = classify_statement(KRUNGTHAI_STATEMENT).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["bank"], "krungthai");
    assert_eq!(json["account_number"], "987-6-54321-0");
    assert_eq!(json["transactions"][1]["polarity"], "income");
    assert_eq!(json["transactions"][1]["date"], "2025-07-02");
    assert_eq!(json["transactions"][1]["time"], "12:10:00");
}
