use bmicalc_model::report::BmiReport;

pub const STYLESHEET: &str = "\
body {
    font-family: Arial, sans-serif;
    text-align: center;
    margin: 20px;
}
h1 {
    color: #4CAF50;
}
form {
    margin-top: 20px;
}
label, input, select {
    display: block;
    margin: 10px auto;
}
button {
    background-color: #4CAF50;
    color: white;
    padding: 10px 20px;
    border: none;
    cursor: pointer;
}
button:hover {
    background-color: #45a049;
}
a {
    color: #4CAF50;
    text-decoration: none;
}
a:hover {
    text-decoration: underline;
}
";

pub const FORM: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <link rel="stylesheet" href="/style.css">
    <title>BMI Calculator</title>
</head>
<body>
    <h1>BMI Calculator</h1>
    <form action="/calculate" method="post">
        <label for="weight">Weight (kg):</label>
        <input type="number" id="weight" name="weight" step="0.1" required>
        <label for="height">Height (m):</label>
        <input type="number" id="height" name="height" step="0.01" required>
        <label for="age">Age:</label>
        <input type="number" id="age" name="age" required>
        <label for="gender">Gender:</label>
        <select id="gender" name="gender" required>
            <option value="male">Male</option>
            <option value="female">Female</option>
        </select>
        <button type="submit">Calculate</button>
    </form>
</body>
</html>
"#;

pub const INVALID_INPUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <link rel="stylesheet" href="/style.css">
    <title>Error</title>
</head>
<body>
    <h1>Error</h1>
    <p>Please provide valid and positive numbers for weight and height.</p>
    <a href="/">Go back</a>
</body>
</html>
"#;

pub fn result(report: &BmiReport) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <link rel="stylesheet" href="/style.css">
    <title>BMI Result</title>
</head>
<body>
    <h1>Your BMI is {bmi:.2}</h1>
    <p>Category: {category}</p>
    <p>Health Tips: {tip}</p>
    <a href="/">Go back</a>
</body>
</html>
"#,
        bmi = report.bmi(),
        category = report.category(),
        tip = report.category().tip(),
    )
}
